fn main() -> anyhow::Result<()> {
    codex_transcript::cli::run()
}
