use std::collections::VecDeque;
use std::fmt;

use ErrorKind;

/// Integer stack whose top is the last element, while `pop_front` and `inc`
/// work from the front (index 0).
pub struct Stack {
    frames: VecDeque<i64>,
}

impl Stack {
    pub fn new() -> Stack {
        Stack {
            frames: VecDeque::new(),
        }
    }

    pub fn push(&mut self, value: i64) {
        self.frames.push_back(value);
    }

    /// Removes the element at index 0.
    pub fn pop_front(&mut self) -> ::Result<i64> {
        self.frames
            .pop_front()
            .ok_or_else(|| ErrorKind::StackUnderflow.into())
    }

    /// Adds `amount` to each of the first `count` elements.
    ///
    /// A non-positive `count` touches nothing. A `count` larger than the
    /// stack fails without modifying any element.
    pub fn inc(&mut self, count: i64, amount: i64) -> ::Result<()> {
        if count <= 0 {
            return Ok(());
        }

        let len = self.frames.len();
        if count as u64 > len as u64 {
            bail!(ErrorKind::IndexOutOfRange(count as usize, len));
        }

        for frame in self.frames.iter_mut().take(count as usize) {
            *frame = frame.wrapping_add(amount);
        }

        Ok(())
    }

    pub fn top(&self) -> Option<i64> {
        self.frames.back().cloned()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> ::std::collections::vec_deque::Iter<i64> {
        self.frames.iter()
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.frames.iter().cloned().collect()
    }
}

impl Default for Stack {
    fn default() -> Stack {
        Stack::new()
    }
}

impl From<Vec<i64>> for Stack {
    fn from(values: Vec<i64>) -> Stack {
        Stack {
            frames: values.into(),
        }
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Stack {{")?;
        writeln!(f, "[")?;
        for (i, value) in self.frames.iter().enumerate() {
            writeln!(f, "    {}: {}", i, value)?;
        }
        writeln!(f, "]")?;
        writeln!(f, "  LEN: {}", self.frames.len())?;
        writeln!(f, "}}")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_from_empty() {
        let mut stack = Stack::new();
        match stack.pop_front() {
            Err(::Error(ErrorKind::StackUnderflow, _)) => {}
            other => panic!("expected underflow, got {:?}", other),
        }
    }

    #[test]
    fn pop_takes_the_front() {
        let mut stack = Stack::from(vec![6, 4, 8, 7]);
        assert_eq!(6, stack.pop_front().unwrap());
        assert_eq!(vec![4, 8, 7], stack.to_vec());
        assert_eq!(Some(7), stack.top());
    }

    #[test]
    fn push_becomes_top() {
        let mut stack = Stack::new();
        stack.push(128);
        stack.push(-3);
        assert_eq!(Some(-3), stack.top());
        assert_eq!(2, stack.len());
    }

    #[test]
    fn inc_prefix() {
        let mut stack = Stack::from(vec![4, 8, 7]);
        stack.inc(2, 7).unwrap();
        let values: Vec<i64> = stack.iter().cloned().collect();
        assert_eq!(vec![11, 15, 7], values);
    }

    #[test]
    fn inc_whole_stack() {
        let mut stack = Stack::from(vec![4, 8, 7]);
        stack.inc(3, 7).unwrap();
        assert_eq!(vec![11, 15, 14], stack.to_vec());
    }

    #[test]
    fn inc_past_the_end_leaves_stack_alone() {
        let mut stack = Stack::from(vec![1, 2]);
        match stack.inc(3, 10) {
            Err(::Error(ErrorKind::IndexOutOfRange(3, 2), _)) => {}
            other => panic!("expected out of range, got {:?}", other),
        }
        assert_eq!(vec![1, 2], stack.to_vec());
    }

    #[test]
    fn inc_non_positive_count_is_noop() {
        let mut stack = Stack::from(vec![1]);
        stack.inc(0, 5).unwrap();
        stack.inc(-4, 5).unwrap();
        assert_eq!(vec![1], stack.to_vec());

        Stack::new().inc(0, 1).unwrap();
    }

    #[test]
    fn inc_wraps() {
        let mut stack = Stack::from(vec![i64::max_value()]);
        stack.inc(1, 1).unwrap();
        assert_eq!(Some(i64::min_value()), stack.top());
    }
}
