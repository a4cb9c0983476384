pub mod new;
pub mod run;
pub mod templates;
