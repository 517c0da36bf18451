pub fn machine() -> anyhow::Result<String> {
    anyhow::bail!("Hardware identifiers are not readable on Android")
}
