pub const ROOT_USER_ID: i64 = 0;

pub const DEFAULT_DIALECT: &str = "psql";

pub mod properties {

    pub const DB_VERSION: &str = "omero.db.version";

    pub const DB_PATCH: &str = "omero.db.patch";

    /// Location of the properties file relative to the distribution directory.
    pub const RELATIVE_PATH: &str = "etc/omero.properties";
}

pub mod sql {

    pub const HEADER_SUFFIX: &str = "-header.sql";

    pub const FOOTER_SUFFIX: &str = "-footer.sql";
}
