//! src/derive/salt.rs
//! Salt resolution: caller's salt if given, otherwise 8 fresh OS bytes

use crate::consts::SALT_LEN;
use crate::crypto::rng::SaltSource;
use crate::error::OpenSslKdfError;

/// Salt chosen for one derivation.
///
/// `generated` records whether `bytes` came from the random source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSalt {
    pub bytes: Vec<u8>,
    pub generated: bool,
}

/// Resolve the salt for a derivation.
///
/// A provided, non-empty salt is returned untouched and its length is not
/// checked: legacy producers are known to use salts other than 8 bytes.
/// An absent or empty salt is replaced by [`SALT_LEN`] bytes from `rng`, the
/// only path that consumes entropy.
pub fn resolve_salt<S>(
    provided: Option<Vec<u8>>,
    rng: &mut S,
) -> Result<ResolvedSalt, OpenSslKdfError>
where
    S: SaltSource + ?Sized,
{
    match provided {
        Some(bytes) if !bytes.is_empty() => Ok(ResolvedSalt {
            bytes,
            generated: false,
        }),
        _ => Ok(ResolvedSalt {
            bytes: rng.random_bytes(SALT_LEN)?,
            generated: true,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSource {
        calls: usize,
    }

    impl SaltSource for CountingSource {
        fn fill_random(&mut self, dest: &mut [u8]) -> Result<(), OpenSslKdfError> {
            self.calls += 1;
            dest.fill(0x5A);
            Ok(())
        }
    }

    struct DeadSource;

    impl SaltSource for DeadSource {
        fn fill_random(&mut self, _dest: &mut [u8]) -> Result<(), OpenSslKdfError> {
            Err(OpenSslKdfError::EntropySourceUnavailable("no entropy".into()))
        }
    }

    #[test]
    fn provided_salt_is_untouched_and_costs_no_entropy() {
        let mut rng = CountingSource::default();
        for salt in [vec![1u8; 8], vec![2u8; 3], vec![3u8; 16]] {
            let resolved = resolve_salt(Some(salt.clone()), &mut rng).unwrap();
            assert_eq!(resolved.bytes, salt);
            assert!(!resolved.generated);
        }
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn missing_or_empty_salt_is_generated() {
        let mut rng = CountingSource::default();
        for provided in [None, Some(Vec::new())] {
            let resolved = resolve_salt(provided, &mut rng).unwrap();
            assert_eq!(resolved.bytes, vec![0x5A; SALT_LEN]);
            assert!(resolved.generated);
        }
        assert_eq!(rng.calls, 2);
    }

    #[test]
    fn dead_source_is_fatal() {
        assert!(matches!(
            resolve_salt(None, &mut DeadSource),
            Err(OpenSslKdfError::EntropySourceUnavailable(_))
        ));
        // provided salts never touch the source
        assert!(resolve_salt(Some(vec![9; 8]), &mut DeadSource).is_ok());
    }
}
