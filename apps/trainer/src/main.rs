fn main() -> anyhow::Result<()> {
    vocab_trainer::run()
}
