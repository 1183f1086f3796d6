use std::collections::VecDeque;

/// Ordered queue of observers that can be consumed from either end.
#[derive(Debug, Clone)]
pub struct Subject<O> {
    observers: VecDeque<O>,
}

impl<O> Default for Subject<O> {
    fn default() -> Self {
        Self {
            observers: VecDeque::new(),
        }
    }
}

impl<O> Subject<O> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn subscribe(&mut self, observer: O) -> &mut Self {
        self.observers.push_back(observer);
        self
    }

    /// Subscribes every observer of `source`, keeping its order.
    pub fn extend(&mut self, source: Subject<O>) -> &mut Self {
        self.observers.extend(source.observers);
        self
    }

    /// Removes the first observer so the caller can notify it.
    #[inline]
    pub fn shift(&mut self) -> Option<O> {
        self.observers.pop_front()
    }

    /// Removes the last observer so the caller can notify it.
    #[inline]
    pub fn pop(&mut self) -> Option<O> {
        self.observers.pop_back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &O> {
        self.observers.iter()
    }
}

impl<O: PartialEq> Subject<O> {
    pub fn contains(&self, observer: &O) -> bool {
        self.observers.contains(observer)
    }

    pub fn unsubscribe(&mut self, observer: &O) -> bool {
        match self.observers.iter().position(|o| o == observer) {
            Some(index) => {
                self.observers.remove(index);
                true
            }
            None => false,
        }
    }
}
