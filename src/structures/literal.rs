/*!
Literals are variables paired with a (boolean) polarity.

The representation packs a literal into a single integer, `2 * variable + polarity_bit`, with a polarity bit of 1 for the positive literal.
So, the two literals of a variable are bitwise partners, and the complement of a literal is obtained by flipping the low bit.

This keeps literals [Copy], cheap to compare, and directly usable as indices into per-literal tables such as [watch lists](crate::db::watches).

In solver input and output an integer form is often used instead, with the sign of the integer indicating the polarity and variable indices starting from 1.
Conversions between the two forms are provided, and used at the [builder](crate::builder) boundary.

# Example

```rust
# use marten_sat::structures::literal::Lit;
let literal = Lit::new(79, true);

assert!(literal.polarity());
assert_eq!(literal.var(), 79);

let negation = literal.negate();
assert!(!negation.polarity());
assert_eq!(negation.var(), 79);

assert_eq!(literal.as_int(), 80);
assert_eq!(negation.as_int(), -80);
```
*/

use crate::structures::Var;

/// A literal, packed as `2 * variable + polarity_bit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit(u32);

impl Lit {
    /// The literal of `var` with the given polarity.
    pub fn new(var: Var, polarity: bool) -> Self {
        Lit((var << 1) | (polarity as u32))
    }

    /// The variable of the literal.
    pub fn var(self) -> Var {
        self.0 >> 1
    }

    /// The polarity of the literal — true for the positive literal of the variable.
    pub fn polarity(self) -> bool {
        (self.0 & 1) != 0
    }

    /// The negation of the literal, i.e. its bitwise partner.
    pub fn negate(self) -> Self {
        Lit(self.0 ^ 1)
    }

    /// The packed form of the literal, for use as a table index.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The literal in integer form, with sign indicating polarity and variables indexed from 1.
    pub fn as_int(self) -> i64 {
        let magnitude = (self.var() + 1) as i64;
        if self.polarity() {
            magnitude
        } else {
            -magnitude
        }
    }

    /// The literal corresponding to a non-zero integer, with sign indicating polarity and variables indexed from 1.
    pub fn from_int(int: i64) -> Self {
        debug_assert!(int != 0);
        Lit::new((int.unsigned_abs() - 1) as Var, int > 0)
    }
}

impl std::ops::Neg for Lit {
    type Output = Lit;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Lit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packing() {
        let p = Lit::new(0, true);
        let not_p = Lit::new(0, false);

        assert_eq!(p.negate(), not_p);
        assert_eq!(not_p.negate(), p);
        assert_eq!(p.var(), not_p.var());
        assert_ne!(p.index(), not_p.index());
    }

    #[test]
    fn integer_form() {
        for int in [-3_i64, -1, 1, 7] {
            assert_eq!(Lit::from_int(int).as_int(), int);
        }
        assert_eq!(Lit::from_int(-1), Lit::new(0, false));
        assert_eq!(-Lit::from_int(4), Lit::from_int(-4));
    }

    #[test]
    fn ordering() {
        // Literals of a variable sort together, negative first.
        let mut literals = vec![Lit::new(2, true), Lit::new(1, true), Lit::new(2, false)];
        literals.sort();
        assert_eq!(
            literals,
            vec![Lit::new(1, true), Lit::new(2, false), Lit::new(2, true)]
        );
    }
}
