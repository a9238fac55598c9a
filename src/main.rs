fn main() -> anyhow::Result<()> {
    evtally::cli::run()
}
