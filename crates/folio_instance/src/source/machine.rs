use machineid_rs::{Encryption, HWIDComponent, IdBuilder};
use uuid::Uuid;

const HASH_KEY: &str = "folio_instance";

/// Keeps machine-derived ids apart from UUIDs produced by the other sources
const MACHINE_NAMESPACE: Uuid = Uuid::from_u128(0x8f1c_6a52_3d0e_4b7a_9c21_5e4f_a0d3_b716);

/// Stable per-machine UUID derived from a hash of hardware identifiers, so
/// ids from every source share one format.
pub fn machine() -> anyhow::Result<String> {
    let mut builder = IdBuilder::new(Encryption::SHA256);
    for component in [HWIDComponent::SystemID, HWIDComponent::CPUCores] {
        builder.add_component(component);
    }

    let hardware_hash = builder
        .build(HASH_KEY)
        .map_err(|e| anyhow::anyhow!("Failed to read hardware identifiers: {e}"))?;

    Ok(Uuid::new_v5(&MACHINE_NAMESPACE, hardware_hash.as_bytes()).to_string())
}
