pub mod home;
pub mod project;
pub mod results;

pub use home::{home_page, HomeVm};
pub use project::project_page;
pub use results::{results_page, ResultsVm};
