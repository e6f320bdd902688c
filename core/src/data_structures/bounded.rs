//! Fixed-capacity stack and queue for the data structure visualizers
//!
//! Every rejected operation leaves the structure untouched and reports a
//! [`ContainerError`] whose message is shown to the learner as-is.

use std::collections::VecDeque;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capacity used by both visualizers
pub const DEFAULT_CAPACITY: usize = 10;

/// Which structure reported an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    Stack,
    Queue,
}

impl ContainerKind {
    fn overflow_message(self) -> &'static str {
        match self {
            Self::Stack => "Stack Overflow! Cannot push more elements.",
            Self::Queue => "Queue Overflow! Cannot enqueue more elements.",
        }
    }

    fn underflow_message(self) -> &'static str {
        match self {
            Self::Stack => "Stack Underflow! The stack is empty.",
            Self::Queue => "Queue Underflow! The queue is empty.",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            Self::Stack => "Stack is empty. Nothing to peek.",
            Self::Queue => "Queue is empty. Nothing to peek.",
        }
    }
}

/// Soft failures of the bounded containers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    #[error("{}", .0.overflow_message())]
    Overflow(ContainerKind),

    #[error("{}", .0.underflow_message())]
    Underflow(ContainerKind),

    #[error("{}", .0.empty_message())]
    Empty(ContainerKind),

    #[error("Please enter a valid number.")]
    InvalidInput(String),
}

fn parse_input<T: FromStr>(input: &str) -> Result<T, ContainerError> {
    input
        .trim()
        .parse()
        .map_err(|_| ContainerError::InvalidInput(input.to_owned()))
}

/// LIFO stack with a hard capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
    #[serde(default)]
    touched: Option<usize>,
}

impl<T: Clone + Display> BoundedStack<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            touched: None,
        }
    }

    pub fn push(&mut self, value: T) -> Result<String, ContainerError> {
        if self.is_full() {
            return Err(ContainerError::Overflow(ContainerKind::Stack));
        }
        let message = format!("Pushed {value} onto the stack.");
        self.items.push(value);
        self.touched = Some(self.items.len() - 1);
        Ok(message)
    }

    /// Parses learner text input; overflow is reported before parse errors
    pub fn push_input(&mut self, input: &str) -> Result<String, ContainerError>
    where
        T: FromStr,
    {
        if self.is_full() {
            return Err(ContainerError::Overflow(ContainerKind::Stack));
        }
        self.push(parse_input(input)?)
    }

    pub fn pop(&mut self) -> Result<T, ContainerError> {
        let value = self
            .items
            .pop()
            .ok_or(ContainerError::Underflow(ContainerKind::Stack))?;
        self.touched = None;
        Ok(value)
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items
            .last()
            .ok_or(ContainerError::Empty(ContainerKind::Stack))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.touched = None;
    }

    /// Slot written by the last successful insertion, if still current
    pub fn highlighted(&self) -> Option<usize> {
        self.touched
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Elements from top to bottom, the order they are drawn in
    pub fn iter_from_top(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }
}

impl<T: Clone + Display> Default for BoundedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// FIFO queue with a hard capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundedQueue<T> {
    items: VecDeque<T>,
    capacity: usize,
    #[serde(default)]
    touched: Option<usize>,
}

impl<T: Clone + Display> BoundedQueue<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
            touched: None,
        }
    }

    pub fn enqueue(&mut self, value: T) -> Result<String, ContainerError> {
        if self.is_full() {
            return Err(ContainerError::Overflow(ContainerKind::Queue));
        }
        let message = format!("Enqueued {value} into the queue.");
        self.items.push_back(value);
        self.touched = Some(self.items.len() - 1);
        Ok(message)
    }

    pub fn enqueue_input(&mut self, input: &str) -> Result<String, ContainerError>
    where
        T: FromStr,
    {
        if self.is_full() {
            return Err(ContainerError::Overflow(ContainerKind::Queue));
        }
        self.enqueue(parse_input(input)?)
    }

    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        let value = self
            .items
            .pop_front()
            .ok_or(ContainerError::Underflow(ContainerKind::Queue))?;
        self.touched = None;
        Ok(value)
    }

    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items
            .front()
            .ok_or(ContainerError::Empty(ContainerKind::Queue))
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.touched = None;
    }

    /// Slot written by the last successful insertion, if still current
    pub fn highlighted(&self) -> Option<usize> {
        self.touched
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Elements from front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Clone + Display> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_overflow_leaves_state_unchanged() {
        let mut stack = BoundedStack::<i64>::new();
        for v in 0..10 {
            stack.push(v).unwrap();
        }
        let before = stack.clone();

        assert_eq!(stack.push(99), Err(ContainerError::Overflow(ContainerKind::Stack)));
        assert_eq!(stack.push_input("abc"), Err(ContainerError::Overflow(ContainerKind::Stack)));
        assert_eq!(stack, before);
        assert_eq!(
            stack.push(1).unwrap_err().to_string(),
            "Stack Overflow! Cannot push more elements."
        );
    }

    #[test]
    fn test_stack_lifo_and_underflow() {
        let mut stack = BoundedStack::<i64>::new();
        assert_eq!(stack.push_input(" 7 ").unwrap(), "Pushed 7 onto the stack.");
        stack.push(8).unwrap();
        assert_eq!(stack.highlighted(), Some(1));
        assert_eq!(stack.iter_from_top().copied().collect::<Vec<_>>(), vec![8, 7]);
        assert_eq!(stack.pop(), Ok(8));
        assert_eq!(stack.pop(), Ok(7));
        assert_eq!(stack.pop(), Err(ContainerError::Underflow(ContainerKind::Stack)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_peek_never_mutates() {
        let mut stack = BoundedStack::<i64>::new();
        assert_eq!(stack.peek(), Err(ContainerError::Empty(ContainerKind::Stack)));
        stack.push(3).unwrap();
        let before = stack.clone();
        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack.peek(), Ok(&3));
        assert_eq!(stack, before);

        let mut queue = BoundedQueue::<i64>::new();
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        let before = queue.clone();
        assert_eq!(queue.peek(), Ok(&1));
        assert_eq!(queue, before);
    }

    #[test]
    fn test_invalid_input_is_reported() {
        let mut queue = BoundedQueue::<i64>::new();
        let err = queue.enqueue_input("twelve").unwrap_err();
        assert_eq!(err, ContainerError::InvalidInput("twelve".to_owned()));
        assert_eq!(err.to_string(), "Please enter a valid number.");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_queue_fifo_overflow_and_underflow() {
        let mut queue = BoundedQueue::<i64>::new();
        for v in 0..10 {
            queue.enqueue(v).unwrap();
        }
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(10), Err(ContainerError::Overflow(ContainerKind::Queue)));
        assert_eq!(queue.len(), 10);

        assert_eq!(queue.highlighted(), Some(9));
        assert_eq!(queue.dequeue(), Ok(0));
        assert_eq!(queue.highlighted(), None);
        assert_eq!(queue.iter().next(), Some(&1));
        queue.clear();
        assert_eq!(
            queue.dequeue().unwrap_err().to_string(),
            "Queue Underflow! The queue is empty."
        );
    }
}
