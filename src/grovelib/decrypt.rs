use crate::error::DecryptError;
use crate::mixer::mix;
use crate::ring::{Ring, Value};

pub const DECRYPTION_KEY: Value = 811589153;

const COORDINATE_OFFSETS: [usize; 3] = [1000, 2000, 3000];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub key: Value,
    pub passes: usize,
}

impl Scenario {
    pub const PART_ONE: Scenario = Scenario { key: 1, passes: 1 };
    pub const PART_TWO: Scenario = Scenario {
        key: DECRYPTION_KEY,
        passes: 10,
    };
}

/// Sum the values 1000, 2000 and 3000 places after the element holding 0.
pub fn grove_coordinates(ring: &Ring) -> Result<Value, DecryptError> {
    let zero = ring
        .find_by_value(0)
        .ok_or(DecryptError::MissingZeroElement)?
        .original_index;
    log::debug!("zero is original element {}", zero);
    COORDINATE_OFFSETS
        .into_iter()
        .map(|offset| ring.element_at(zero, offset).value)
        .try_fold(0 as Value, |acc, v| {
            log::debug!("coordinate {}", v);
            acc.checked_add(v).ok_or(DecryptError::SumOverflow)
        })
}

pub fn decrypt(values: &[Value], scenario: Scenario) -> Result<Value, DecryptError> {
    let scaled = values
        .iter()
        .map(|&value| {
            value
                .checked_mul(scenario.key)
                .ok_or(DecryptError::KeyOverflow {
                    value,
                    key: scenario.key,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let mut ring = Ring::new(&scaled)?;
    log::debug!(
        "mixing {} elements for {} pass(es)",
        ring.len(),
        scenario.passes
    );
    mix(&mut ring, scenario.passes);
    grove_coordinates(&ring)
}

#[cfg(test)]
mod tests {
    use super::{decrypt, grove_coordinates, Scenario};
    use crate::error::DecryptError;
    use crate::ring::Ring;

    const SAMPLE: [i64; 7] = [1, 2, -3, 3, -2, 0, 4];

    #[test]
    fn test_part_one() {
        assert_eq!(decrypt(&SAMPLE, Scenario::PART_ONE), Ok(3));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(decrypt(&SAMPLE, Scenario::PART_TWO), Ok(1623178306));
    }

    #[test]
    fn test_parts_are_independent() {
        let first = decrypt(&SAMPLE, Scenario::PART_ONE);
        let second = decrypt(&SAMPLE, Scenario::PART_TWO);
        assert_eq!(decrypt(&SAMPLE, Scenario::PART_ONE), first);
        assert_eq!(decrypt(&SAMPLE, Scenario::PART_TWO), second);
    }

    #[test]
    fn test_two_elements() {
        assert_eq!(decrypt(&[0, 5], Scenario::PART_ONE), Ok(0));
        // 1000, 2000 and 3000 are all even, so every offset lands back on 0
        assert_eq!(decrypt(&[5, 0], Scenario::PART_TWO), Ok(0));
    }

    #[test]
    fn test_coordinates_unmixed() {
        let ring = Ring::new(&[0, 1, 2]).unwrap();
        // 1000 % 3 == 1, 2000 % 3 == 2, 3000 % 3 == 0
        assert_eq!(grove_coordinates(&ring), Ok(3));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            decrypt(&[1, 2, 3], Scenario::PART_ONE),
            Err(DecryptError::MissingZeroElement)
        );
        assert_eq!(
            decrypt(&[0], Scenario::PART_ONE),
            Err(DecryptError::DegenerateSequence { len: 1 })
        );
        assert_eq!(
            decrypt(&[0, i64::MAX / 2], Scenario::PART_TWO),
            Err(DecryptError::KeyOverflow {
                value: i64::MAX / 2,
                key: super::DECRYPTION_KEY,
            })
        );
        let ring = Ring::new(&[0, i64::MAX, i64::MAX]).unwrap();
        assert_eq!(grove_coordinates(&ring), Err(DecryptError::SumOverflow));
    }
}
