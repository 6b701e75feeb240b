//! Fixed-capacity FIFO queue with a compile-time shift direction
//!
//! 编译期确定移动方向的固定容量 FIFO 队列

use crate::error::CapacityError;
use crate::mode::sealed::Layout;
use crate::mode::{Optimization, QueueOptimization, WriteOptimized};
use crate::shim::trace;
use crate::slots::Slots;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Bounded FIFO queue holding at most `N` elements
///
/// 最多容纳 `N` 个元素的有界 FIFO 队列
///
/// # Type Parameters
/// - `T`: Element type
/// - `N`: Capacity
/// - `M`: Optimization mode, [`WriteOptimized`] (default) or
///   [`ReadOptimized`](crate::ReadOptimized)
///
/// # 类型参数
/// - `T`: 元素类型
/// - `N`: 容量
/// - `M`: 优化模式，[`WriteOptimized`]（默认）或 [`ReadOptimized`](crate::ReadOptimized)
///
/// Both modes expose the same logical order; only the physical layout and
/// which operation pays the O(len) shift differ.
///
/// 两种模式呈现相同的逻辑顺序；区别仅在于物理布局以及由哪个操作承担 O(len) 的移动开销。
///
/// # Examples
///
/// ```
/// use fixring::{BoundedQueue, ReadOptimized};
///
/// let mut queue: BoundedQueue<i32, 16, ReadOptimized> = BoundedQueue::new();
/// queue.push(12).unwrap();
/// queue.push(24).unwrap();
/// assert_eq!(queue.front(), Some(&12));
/// assert_eq!(queue.back(), Some(&24));
/// assert_eq!(queue.copy_and_pop(), Some(12));
/// ```
pub struct BoundedQueue<T, const N: usize, M: Optimization = WriteOptimized> {
    slots: Slots<T, N>,
    len: usize,
    _mode: PhantomData<M>,
}

impl<T, const N: usize, M: Optimization> BoundedQueue<T, N, M> {
    /// Create an empty queue
    ///
    /// 创建空队列
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Slots::new(),
            len: 0,
            _mode: PhantomData,
        }
    }

    /// The mode selected by `M`
    ///
    /// 由 `M` 选择的模式
    #[inline]
    pub const fn optimized_for(&self) -> QueueOptimization {
        M::KIND
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Alias of [`len`](Self::len)
    #[inline]
    pub const fn size(&self) -> usize {
        self.len()
    }

    /// Alias of [`capacity`](Self::capacity)
    #[inline]
    pub const fn max_size(&self) -> usize {
        self.capacity()
    }

    /// Alias of [`is_empty`](Self::is_empty)
    #[inline]
    pub const fn empty(&self) -> bool {
        self.is_empty()
    }

    /// Alias of [`is_full`](Self::is_full)
    #[inline]
    pub const fn full(&self) -> bool {
        self.is_full()
    }

    /// Append an element at the back
    ///
    /// 在尾部追加元素
    ///
    /// O(1) when write-optimized, O(len) when read-optimized.
    ///
    /// # Errors
    ///
    /// Returns the element inside [`CapacityError`] when the queue is full;
    /// the queue is left unchanged.
    ///
    /// 队列已满时将元素包装在 [`CapacityError`] 中返回；队列保持不变。
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::BoundedQueue;
    ///
    /// let mut queue: BoundedQueue<i32, 2> = BoundedQueue::new();
    /// queue.push(1).unwrap();
    /// queue.push(2).unwrap();
    /// assert_eq!(queue.push(3).unwrap_err().into_inner(), 3);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.len == N {
            trace!(capacity = N, "bounded queue full, push rejected");
            return Err(CapacityError::new(value));
        }

        unsafe { M::insert(&mut self.slots, self.len, value) };
        self.len += 1;
        Ok(())
    }

    /// Discard the front element
    ///
    /// 丢弃队首元素
    ///
    /// O(len) when write-optimized, O(1) when read-optimized. No-op on an
    /// empty queue.
    ///
    /// 写优化时为 O(len)，读优化时为 O(1)。空队列上不执行任何操作。
    #[inline]
    pub fn pop(&mut self) {
        drop(self.copy_and_pop());
    }

    /// Remove and return the front element
    ///
    /// 移除并返回队首元素
    ///
    /// Returns `None` on an empty queue.
    ///
    /// 空队列时返回 `None`。
    pub fn copy_and_pop(&mut self) -> Option<T> {
        if self.len == 0 {
            trace!("pop on empty bounded queue");
            return None;
        }

        let front = unsafe { M::remove_front(&mut self.slots, self.len) };
        self.len -= 1;
        Some(front)
    }

    /// Get the element at logical position `index` (0 = front)
    ///
    /// 获取逻辑位置 `index` 处的元素（0 = 队首）
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(unsafe { self.slots.get(M::physical(self.len, index)) })
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let physical = M::physical(self.len, index);
            Some(unsafe { self.slots.get_mut(physical) })
        } else {
            None
        }
    }

    /// Next element to be popped
    ///
    /// 下一个将被弹出的元素
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Most recently pushed element
    ///
    /// 最近推送的元素
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.get_mut(last),
            None => None,
        }
    }

    /// Remove every element
    ///
    /// 移除所有元素
    pub fn clear(&mut self) {
        // Live elements always sit in slots[0..len] whatever the mode
        let len = self.len;
        self.len = 0;
        for index in 0..len {
            unsafe { self.slots.drop_at(index) };
        }
    }

    /// Iterate from front to back
    ///
    /// 从队首到队尾迭代
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N, M> {
        Iter {
            queue: self,
            front: 0,
            back: self.len,
        }
    }
}

impl<T, const N: usize, M: Optimization> Drop for BoundedQueue<T, N, M> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, const N: usize, M: Optimization> Default for BoundedQueue<T, N, M> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize, M: Optimization> Clone for BoundedQueue<T, N, M> {
    fn clone(&self) -> Self {
        let mut cloned = Self::new();
        for value in self.iter() {
            // Same capacity, cannot overflow
            let _ = cloned.push(value.clone());
        }
        cloned
    }
}

impl<T: fmt::Debug, const N: usize, M: Optimization> fmt::Debug for BoundedQueue<T, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, const N: usize, M: Optimization> IntoIterator for &'a BoundedQueue<T, N, M> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N, M>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`BoundedQueue`], front first
///
/// [`BoundedQueue`] 的借用迭代器，从队首开始
pub struct Iter<'a, T, const N: usize, M: Optimization> {
    queue: &'a BoundedQueue<T, N, M>,
    front: usize,
    back: usize,
}

impl<'a, T, const N: usize, M: Optimization> Iterator for Iter<'a, T, N, M> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let value = self.queue.get(self.front);
        self.front += 1;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T, const N: usize, M: Optimization> DoubleEndedIterator for Iter<'a, T, N, M> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.queue.get(self.back)
    }
}

impl<T, const N: usize, M: Optimization> ExactSizeIterator for Iter<'_, T, N, M> {}

impl<T, const N: usize, M: Optimization> FusedIterator for Iter<'_, T, N, M> {}
