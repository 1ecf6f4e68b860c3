//! Hybrid O-1A assessment: a deterministic rule-based matcher and an
//! LLM-based validator run independently over the same CV text, and their
//! ratings are reconciled conservatively.

pub mod criteria;
pub mod engine;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod rating;
pub mod rules;
pub mod validator;
