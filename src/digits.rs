use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

/// Unsigned magnitude: decimal digit values (`0..=9`), most significant
/// digit first.
///
/// This layer has no notion of sign or decimal point. Callers align
/// fractional lengths before combining two magnitudes and normalize
/// whatever they assemble out of the results.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Digits(Vec<u8>);

// ============================================================================
// Construction and Access
// ============================================================================

impl Digits {
    /// The single-digit magnitude `0`.
    pub(crate) fn zero() -> Self {
        Self(vec![0])
    }

    /// The single-digit magnitude `1`.
    pub(crate) fn one() -> Self {
        Self(vec![1])
    }

    /// Wraps a non-empty sequence of digit values.
    pub(crate) fn from_values(values: Vec<u8>) -> Self {
        debug_assert!(!values.is_empty());
        debug_assert!(values.iter().all(|&d| d <= 9));
        Self(values)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub(crate) fn digit(&self, idx: usize) -> u8 {
        self.0[idx]
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns `true` if every digit is zero, regardless of length.
    pub(crate) fn is_zero(&self) -> bool {
        self.0.iter().all(|&d| d == 0)
    }
}

// ============================================================================
// In-place Editing
// ============================================================================

impl Digits {
    /// Appends `count` zero digits on the least significant side.
    pub(crate) fn push_zeros(&mut self, count: usize) {
        self.0.resize(self.0.len() + count, 0);
    }

    /// Prepends a single zero digit.
    pub(crate) fn insert_leading_zero(&mut self) {
        self.0.insert(0, 0);
    }

    /// Counts the zero digits at the most significant end, looking at no
    /// more than the first `limit` positions.
    pub(crate) fn leading_zero_run(&self, limit: usize) -> usize {
        self.0
            .iter()
            .take(limit)
            .take_while(|&&d| d == 0)
            .count()
    }

    /// Drops `count` digits from the most significant end.
    pub(crate) fn strip_leading(&mut self, count: usize) {
        if count > 0 {
            self.0.drain(..count);
        }
    }

    /// Pops up to `limit` trailing zero digits, returning how many were
    /// removed.
    pub(crate) fn pop_trailing_zeros(&mut self, limit: usize) -> usize {
        let mut count = 0;
        while count < limit {
            match self.0.last() {
                Some(0) => {
                    self.0.pop();
                    count += 1;
                }
                _ => break,
            }
        }
        count
    }

    /// Sets every digit at or after `idx` to zero.
    pub(crate) fn zero_from(&mut self, idx: usize) {
        for d in self.0[idx..].iter_mut() {
            *d = 0;
        }
    }

    /// Copy of the first `len` digits.
    pub(crate) fn head(&self, len: usize) -> Self {
        Self(self.0[..len].to_vec())
    }

    /// Copy with the redundant leading zeros removed; always keeps at least
    /// one digit.
    pub(crate) fn trimmed_leading(&self) -> Self {
        let mut out = self.clone();
        out.trim_leading();
        out
    }

    fn trim_leading(&mut self) {
        let run = self.leading_zero_run(self.len().saturating_sub(1));
        self.strip_leading(run);
    }
}

// ============================================================================
// Primitive Arithmetic
// ============================================================================

impl Digits {
    /// Ripple-carry addition. The shorter operand is treated as if padded
    /// with zeros on the most significant side; a final carry prepends one
    /// digit.
    pub(crate) fn add(&self, rhs: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len().max(rhs.len()) + 1);
        let mut a = self.0.iter().rev();
        let mut b = rhs.0.iter().rev();
        let mut carry = 0u8;

        loop {
            let (x, y) = (a.next(), b.next());
            if x.is_none() && y.is_none() {
                break;
            }
            let sum = x.copied().unwrap_or(0) + y.copied().unwrap_or(0) + carry;
            out.push(sum % 10);
            carry = sum / 10;
        }
        if carry > 0 {
            out.push(carry);
        }

        out.reverse();
        Self(out)
    }

    /// Borrow subtraction. Requires `self >= rhs` numerically and
    /// `self.len() >= rhs.len()`; the result keeps `self.len()` digits,
    /// leading zeros included.
    fn sub(&self, rhs: &Self) -> Self {
        debug_assert!(self.len() >= rhs.len());

        let mut out = Vec::with_capacity(self.len());
        let mut b = rhs.0.iter().rev();
        let mut borrow = 0i8;

        for &x in self.0.iter().rev() {
            let y = b.next().copied().unwrap_or(0);
            let mut v = x as i8 - y as i8 - borrow;
            borrow = 0;
            if v < 0 {
                v += 10;
                borrow = 1;
            }
            out.push(v as u8);
        }
        debug_assert_eq!(borrow, 0);

        out.reverse();
        Self(out)
    }

    /// Subtraction that works out which operand is larger first: by digit
    /// count, then lexicographically for equal counts. Returns whether the
    /// logical result `self - rhs` is negative, along with the unsigned
    /// difference. Equal operands yield an all-zero magnitude of the same
    /// length.
    pub(crate) fn sub_with_sign(&self, rhs: &Self) -> (bool, Self) {
        let order = match self.len().cmp(&rhs.len()) {
            Ordering::Equal => self.0.cmp(&rhs.0),
            unequal => unequal,
        };

        match order {
            Ordering::Greater => (false, self.sub(rhs)),
            Ordering::Less => (true, rhs.sub(self)),
            Ordering::Equal => (false, Self(vec![0; self.len()])),
        }
    }

    /// Schoolbook long multiplication: one single-digit partial product per
    /// digit of `rhs` (least significant first), shifted by zero-suffixing
    /// and accumulated with [`Digits::add`].
    ///
    /// Zero digits of `rhs` still contribute a zero partial of full width,
    /// so the product always spans `self.len() + rhs.len() - 1` digits (one
    /// more with a carry); the fractional bookkeeping upstairs relies on
    /// that.
    pub(crate) fn mul(&self, rhs: &Self) -> Self {
        let mut acc = Self::zero();
        for (shift, &d) in rhs.0.iter().rev().enumerate() {
            let mut partial = self.mul_digit(d);
            partial.push_zeros(shift);
            acc = acc.add(&partial);
        }
        acc
    }

    fn mul_digit(&self, d: u8) -> Self {
        let mut out = Vec::with_capacity(self.len() + 1);
        let mut carry = 0u8;

        for &x in self.0.iter().rev() {
            let v = x * d + carry;
            out.push(v % 10);
            carry = v / 10;
        }
        if carry > 0 {
            out.push(carry);
        }

        out.reverse();
        Self(out)
    }

    /// Long division by repeated subtraction.
    ///
    /// The dividend is left-trimmed and extended with `fractional_digits`
    /// trailing zeros, which manufactures that many fractional quotient
    /// digits. Digits are then brought down one at a time into a running
    /// remainder; each quotient digit is the number of times (0..=9) the
    /// divisor could be subtracted before the remainder went below it.
    ///
    /// The quotient keeps one digit per dividend digit, leading zeros
    /// included. The divisor must not be zero.
    pub(crate) fn long_div(&self, divisor: &Self, fractional_digits: usize) -> Self {
        let divisor = divisor.trimmed_leading();
        let mut dividend = self.trimmed_leading();
        dividend.push_zeros(fractional_digits);

        let mut quotient = Vec::with_capacity(dividend.len());
        let mut remainder = Self(Vec::new());

        for &d in dividend.0.iter() {
            remainder.0.push(d);
            remainder.trim_leading();

            if remainder.len() < divisor.len() {
                quotient.push(0);
                continue;
            }

            let mut count = 0u8;
            let (mut negative, mut diff) = remainder.sub_with_sign(&divisor);
            while !negative {
                count += 1;
                diff.trim_leading();
                remainder = diff;
                let next = remainder.sub_with_sign(&divisor);
                negative = next.0;
                diff = next.1;
            }
            quotient.push(count);
        }

        Self(quotient)
    }

    /// Lexicographic digit comparison; a strict prefix orders first.
    pub(crate) fn cmp_digits(&self, rhs: &Self) -> Ordering {
        self.0.cmp(&rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(values: &[u8]) -> Digits {
        Digits::from_values(values.to_vec())
    }

    #[test]
    fn test_add_basic() {
        assert_eq!(digits(&[1, 2]).add(&digits(&[3, 4])), digits(&[4, 6]));
        assert_eq!(digits(&[9, 9]).add(&digits(&[1])), digits(&[1, 0, 0]));
    }

    #[test]
    fn test_add_unequal_lengths() {
        assert_eq!(
            digits(&[1, 0, 0, 0]).add(&digits(&[7])),
            digits(&[1, 0, 0, 7])
        );
    }

    #[test]
    fn test_add_keeps_leading_zeros() {
        // 0099 + 0999 = 1098: operand zeros are part of the width
        assert_eq!(
            digits(&[0, 0, 9, 9]).add(&digits(&[0, 9, 9, 9])),
            digits(&[1, 0, 9, 8])
        );
    }

    #[test]
    fn test_sub_with_sign_orderings() {
        let (neg, diff) = digits(&[5, 0]).sub_with_sign(&digits(&[7]));
        assert!(!neg);
        assert_eq!(diff, digits(&[4, 3]));

        let (neg, diff) = digits(&[7]).sub_with_sign(&digits(&[5, 0]));
        assert!(neg);
        assert_eq!(diff, digits(&[4, 3]));
    }

    #[test]
    fn test_sub_with_sign_equal_length_lexicographic() {
        let (neg, diff) = digits(&[2, 1]).sub_with_sign(&digits(&[1, 9]));
        assert!(!neg);
        assert_eq!(diff, digits(&[0, 2]));

        let (neg, diff) = digits(&[1, 9]).sub_with_sign(&digits(&[2, 1]));
        assert!(neg);
        assert_eq!(diff, digits(&[0, 2]));
    }

    #[test]
    fn test_sub_with_sign_equal_operands() {
        let (neg, diff) = digits(&[4, 2]).sub_with_sign(&digits(&[4, 2]));
        assert!(!neg);
        assert_eq!(diff, digits(&[0, 0]));
    }

    #[test]
    fn test_mul_basic() {
        assert_eq!(digits(&[1, 2]).mul(&digits(&[3])), digits(&[3, 6]));
        assert_eq!(digits(&[2, 5]).mul(&digits(&[2, 5])), digits(&[6, 2, 5]));
    }

    #[test]
    fn test_mul_zero_digits_keep_width() {
        // 005 * 005 must span 5 digits so a fractional length of 4 still fits
        assert_eq!(
            digits(&[0, 0, 5]).mul(&digits(&[0, 0, 5])),
            digits(&[0, 0, 0, 2, 5])
        );
    }

    #[test]
    fn test_mul_by_zero() {
        let product = digits(&[9, 9]).mul(&digits(&[0]));
        assert!(product.is_zero());
    }

    #[test]
    fn test_long_div_exact() {
        // 100 / 4 = 25
        assert_eq!(
            digits(&[1, 0, 0]).long_div(&digits(&[4]), 0),
            digits(&[0, 2, 5])
        );
    }

    #[test]
    fn test_long_div_fractional_digits() {
        // 10 / 4 with two extra digits = 2.50 -> 0250
        assert_eq!(
            digits(&[1, 0]).long_div(&digits(&[4]), 2),
            digits(&[0, 2, 5, 0])
        );
    }

    #[test]
    fn test_long_div_repeating() {
        // 1 / 3 with four extra digits -> 03333
        assert_eq!(
            digits(&[1]).long_div(&digits(&[3]), 4),
            digits(&[0, 3, 3, 3, 3])
        );
    }

    #[test]
    fn test_long_div_trims_operands() {
        // 0990 / 0099 = 10 (leading zeros carry no weight)
        assert_eq!(
            digits(&[0, 9, 9, 0]).long_div(&digits(&[0, 0, 9, 9]), 0),
            digits(&[0, 1, 0])
        );
    }

    #[test]
    fn test_trimmed_leading_keeps_one_digit() {
        assert_eq!(digits(&[0, 0, 0]).trimmed_leading(), digits(&[0]));
        assert_eq!(digits(&[0, 0, 7]).trimmed_leading(), digits(&[7]));
    }
}
