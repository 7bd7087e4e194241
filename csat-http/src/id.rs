//! Submission ids: random (version 4) UUIDs.

use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, RngCore, SeedableRng};

const TEMPLATE: &str = "xxxxxxxx-xxxx-4xxx-yxxx-xxxxxxxxxxxx";

/// Generate a fresh v4 UUID string.
///
/// Uses the OS random source; if that is unavailable, falls back to a
/// pseudo-random generator seeded from the clock.
pub fn submission_id() -> String {
    let mut bytes = [0u8; 16];
    match OsRng.try_fill_bytes(&mut bytes) {
        Ok(()) => uuid::Builder::from_random_bytes(bytes)
            .into_uuid()
            .to_string(),
        Err(err) => {
            tracing::debug!("OS random source unavailable, using fallback id: {err}");
            let seed = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default();
            fallback_id(&mut SmallRng::seed_from_u64(seed))
        }
    }
}

/// Fill the v4 template: `x` takes any hex digit, `y` one of `8`, `9`, `a`, `b`.
pub(crate) fn fallback_id(rng: &mut impl Rng) -> String {
    TEMPLATE
        .chars()
        .map(|c| match c {
            'x' => hex_digit(rng.gen_range(0..16)),
            'y' => hex_digit(rng.gen_range(8..12)),
            other => other,
        })
        .collect()
}

fn hex_digit(value: u32) -> char {
    char::from_digit(value, 16).unwrap_or('0')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_v4(id: &str) {
        let parsed = uuid::Uuid::parse_str(id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(parsed.get_variant(), uuid::Variant::RFC4122);
        assert_eq!(id, parsed.hyphenated().to_string());
    }

    #[test]
    fn os_ids_are_v4() {
        assert_v4(&submission_id());
    }

    #[test]
    fn ids_differ() {
        assert_ne!(submission_id(), submission_id());
    }

    #[test]
    fn fallback_ids_are_v4() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_v4(&fallback_id(&mut rng));
        }
    }
}
