mod password;
mod script;

pub use password::cmd_db_password;
pub use script::{DbContext, cmd_db_script};
