use omero_admin::run;

fn main() -> anyhow::Result<()> {
    run()
}
