//! Status returned by behavior nodes.

/// The result of evaluating a behavior node.
///
/// Condition nodes report whether they held; action nodes report whether
/// they ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Success becomes Failure and vice versa.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
        }
    }
}

impl From<bool> for Status {
    #[inline]
    fn from(held: bool) -> Self {
        if held { Status::Success } else { Status::Failure }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversion_and_inversion() {
        assert_eq!(Status::from(true), Status::Success);
        assert_eq!(Status::from(false).invert(), Status::Success);
        assert!(Status::Failure.is_failure());
    }
}
