// Résumé tailoring: the one request pipeline this service exists for.
// All generation calls go through llm_client — no direct HTTP calls here.

pub mod format;
pub mod handlers;
pub mod orchestrator;
pub mod prompts;
pub mod sanitize;
