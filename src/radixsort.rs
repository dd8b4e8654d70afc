use std::fmt;

/// Number of distinct decimal digits, i.e., the number of buckets per pass.
pub const RADIX: usize = 10;

/// Returns the number of decimal digits of `num`.
///
/// `0` is a one-digit number.
pub fn num_digits(num: u64) -> u32 {
    let mut x = 1;
    let mut rest = num / 10;
    while rest != 0 {
        x += 1;
        rest /= 10;
    }
    x
}

/// Returns the decimal digit of `num` at radix position `pos`, counting from
/// the least-significant digit.
///
/// Positions beyond the length of `num` yield `0`.
pub fn digit_at(num: u64, pos: u32) -> usize {
    match 10u64.checked_pow(pos) {
        Some(place) => (num / place % 10) as usize,
        None => 0,
    }
}

/// Values of one pass, grouped by the digit at the current radix position.
///
/// Each bucket keeps its values in insertion order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    buckets: [Vec<u64>; RADIX],
}

impl Buckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `num` to the bucket for `digit`.
    pub fn push(&mut self, digit: usize, num: u64) {
        self.buckets[digit].push(num);
    }

    /// Values assigned to `digit`, empty if there are none.
    pub fn get(&self, digit: usize) -> &[u64] {
        &self.buckets[digit]
    }

    /// Iterates over the non-empty buckets in ascending digit order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[u64])> {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(digit, bucket)| (digit, bucket.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Concatenates the buckets in ascending digit order.
    pub fn concat(self) -> Vec<u64> {
        let mut vals = Vec::with_capacity(self.len());
        for bucket in self.buckets {
            vals.extend(bucket);
        }
        vals
    }
}

impl fmt::Debug for Buckets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Places each value into a bucket using the digit at radix position `pos`.
pub fn group(pos: u32, vals: &[u64]) -> Buckets {
    let mut buckets = Buckets::new();
    for &val in vals {
        buckets.push(digit_at(val, pos), val);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buckets_from(entries: &[(usize, Vec<u64>)]) -> Buckets {
        let mut buckets = Buckets::new();
        for (digit, vals) in entries {
            for &val in vals {
                buckets.push(*digit, val);
            }
        }
        buckets
    }

    #[test]
    fn test_num_digits() {
        assert_eq!(num_digits(0), 1);
        assert_eq!(num_digits(9), 1);
        assert_eq!(num_digits(10), 2);
        assert_eq!(num_digits(99), 2);
        assert_eq!(num_digits(999), 3);
        assert_eq!(num_digits(1000), 4);
        assert_eq!(num_digits(9999), 4);
        assert_eq!(num_digits(u64::MAX), 20);
    }

    #[test]
    fn test_digit_at() {
        assert_eq!(digit_at(103, 0), 3);
        assert_eq!(digit_at(103, 1), 0);
        assert_eq!(digit_at(103, 2), 1);
        assert_eq!(digit_at(103, 3), 0);
    }

    #[test]
    fn test_digit_at_wide() {
        // 18446744073709551615
        assert_eq!(digit_at(u64::MAX, 19), 1);
        assert_eq!(digit_at(u64::MAX, 0), 5);
        assert_eq!(digit_at(u64::MAX, 20), 0);
        assert_eq!(digit_at(u64::MAX, 40), 0);
    }

    #[test]
    fn test_group() {
        let vals = [170, 45, 75, 90, 2, 802, 2, 66];

        let expected = buckets_from(&[
            (0, vec![170, 90]),
            (2, vec![2, 802, 2]),
            (5, vec![45, 75]),
            (6, vec![66]),
        ]);
        assert_eq!(group(0, &vals), expected);

        let expected = buckets_from(&[
            (0, vec![2, 802, 2]),
            (4, vec![45]),
            (6, vec![66]),
            (7, vec![170, 75]),
            (9, vec![90]),
        ]);
        assert_eq!(group(1, &vals), expected);

        let expected =
            buckets_from(&[(0, vec![45, 75, 90, 2, 2, 66]), (1, vec![170]), (8, vec![802])]);
        assert_eq!(group(2, &vals), expected);
    }

    #[test]
    fn test_group_keeps_bucket_order() {
        let buckets = group(0, &[2, 802, 12, 2]);
        assert_eq!(buckets.get(2), &[2, 802, 12, 2]);
        assert!(buckets.get(0).is_empty());
        assert_eq!(buckets.iter().count(), 1);
    }

    #[test]
    fn test_concat() {
        let buckets =
            buckets_from(&[(1, vec![170]), (0, vec![45, 75, 90, 2, 2, 66]), (8, vec![802])]);
        assert_eq!(buckets.len(), 8);
        assert_eq!(buckets.concat(), vec![45, 75, 90, 2, 2, 66, 170, 802]);
    }

    #[test]
    fn test_concat_empty() {
        let buckets = Buckets::new();
        assert!(buckets.is_empty());
        assert_eq!(buckets.concat(), Vec::<u64>::new());
    }

    #[test]
    fn test_buckets_debug() {
        let buckets = group(0, &[170, 45, 75, 90]);
        assert_eq!(format!("{:?}", buckets), "{0: [170, 90], 5: [45, 75]}");
    }
}
