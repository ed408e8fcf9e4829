//! SQL text produced by the `db` commands.

use std::fmt::Write as _;

use crate::schema::SchemaVersion;

#[must_use]
pub fn update_password(hash: &str, user_id: i64) -> String {
    format!("UPDATE password SET hash = '{hash}' WHERE experimenter_id  = {user_id};")
}

#[must_use]
pub fn insert_root_password(hash: &str) -> String {
    format!("insert into password values (0,'{hash}');")
}

/// Pieces of a database setup script, rendered in order by [`SetupScript::render`].
#[derive(Debug, Clone)]
pub struct SetupScript<'a> {
    pub schema: &'a SchemaVersion,
    pub generated_at: String,
    pub output_name: String,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub root_password_hash: String,
}

impl SetupScript<'_> {
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = write!(
            out,
            "--\n\
             -- GENERATED {} for schema {}\n\
             --\n\
             -- This file was created by the `db script` command and contains\n\
             -- an MD5 digest of your OMERO root user's password. You should\n\
             -- think about deleting it as soon as possible.\n\
             --\n\
             -- To create your database:\n\
             --\n\
             --     createdb omero\n\
             --     psql omero < {}\n\
             --\n\n",
            self.generated_at, self.schema, self.output_name
        );

        out.push_str("BEGIN;\n\n");

        for section in [&self.header, &self.footer].into_iter().flatten() {
            out.push_str(section);
            if !section.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
        }

        out.push_str("-- Here we set the initial root password.\n");
        out.push_str(&insert_root_password(&self.root_password_hash));
        out.push_str("\n\nCOMMIT;\n");
        out
    }
}
