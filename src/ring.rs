//! Fixed-capacity circular buffer with overwrite-on-full eviction
//!
//! 满时覆盖淘汰的固定容量环形缓冲区
//!
//! This module provides a ring buffer that supports:
//! - Arbitrary element types and arbitrary (non power-of-two) capacities
//! - Inline storage, no heap allocation
//! - Overwrite on full: the oldest element is evicted and handed back
//! - Removal from either end
//!
//! 本模块提供的环形缓冲区支持：
//! - 任意元素类型和任意（非 2 的幂次）容量
//! - 内联存储，无堆分配
//! - 满时覆盖：最旧的元素被淘汰并返回给调用者
//! - 从任意一端移除

use crate::cursor::{wrap_add, wrap_dec, wrap_inc};
use crate::shim::trace;
use crate::slots::Slots;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};

/// Circular buffer holding at most `N` elements
///
/// 最多容纳 `N` 个元素的环形缓冲区
///
/// # Type Parameters
/// - `T`: Element type
/// - `N`: Capacity, must be greater than zero
///
/// # 类型参数
/// - `T`: 元素类型
/// - `N`: 容量，必须大于零
///
/// # Cursors
///
/// `head` is the slot of the oldest live element and `tail` the slot the next
/// push writes to. Both always stay in `[0, N)`. When the buffer is full they
/// coincide, so a push replaces the oldest element and moves both forward.
///
/// # 游标
///
/// `head` 指向最旧存活元素的槽位，`tail` 指向下一次写入的槽位。两者始终在 `[0, N)` 内。
/// 缓冲区满时两者重合，因此推送会替换最旧的元素并同时前移两个游标。
pub struct RingBuffer<T, const N: usize> {
    slots: Slots<T, N>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T, const N: usize> RingBuffer<T, N> {
    const NONZERO_CAPACITY: () = assert!(N > 0, "RingBuffer capacity must be greater than zero");

    /// Create an empty ring buffer
    ///
    /// 创建空的环形缓冲区
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::RingBuffer;
    ///
    /// let buf: RingBuffer<i32, 16> = RingBuffer::new();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 16);
    /// ```
    #[inline]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;

        Self {
            slots: Slots::new(),
            head: 0,
            tail: 0,
            len: 0,
        }
    }

    /// Get the capacity of the ring buffer
    ///
    /// 获取环形缓冲区的容量
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Get the number of live elements
    ///
    /// 获取存活元素数量
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

    /// Store a value in the next write slot
    ///
    /// 将值存入下一个写入槽位
    ///
    /// Returns the physical index the value landed in and the element it
    /// displaced, if the buffer was full.
    ///
    /// 返回值所在的物理索引，以及缓冲区满时被替换出的元素。
    #[inline]
    fn place(&mut self, value: T) -> (usize, Option<T>) {
        let index = self.tail;
        self.tail = wrap_inc::<N>(self.tail);

        if self.len == N {
            // Full: head == tail, the oldest element is overwritten
            self.head = self.tail;
            trace!(capacity = N, slot = index, "ring buffer full, evicting oldest element");
            (index, Some(unsafe { self.slots.replace(index, value) }))
        } else {
            unsafe { self.slots.write(index, value) };
            self.len += 1;
            (index, None)
        }
    }

    /// Push an element into the buffer
    ///
    /// 向缓冲区推送一个元素
    ///
    /// Always succeeds. When the buffer is full the oldest element is evicted
    /// and returned as `Some(evicted)`; otherwise returns `None`.
    ///
    /// 总是成功。缓冲区满时最旧的元素被淘汰并以 `Some(evicted)` 返回；否则返回 `None`。
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<i32, 2> = RingBuffer::new();
    /// assert_eq!(buf.push(5), None);
    /// assert_eq!(buf.push(92), None);
    /// assert_eq!(buf.push(18), Some(5)); // Evicted 5
    /// assert_eq!(buf[0], 92);
    /// assert_eq!(buf[1], 18);
    /// ```
    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        self.place(value).1
    }

    /// Construct an element directly in its slot
    ///
    /// 在槽位中直接构造元素
    ///
    /// Uses the same slot selection as [`push`](Self::push). Returns a mutable
    /// reference to the placed element together with the evicted element, if
    /// any.
    ///
    /// 使用与 [`push`](Self::push) 相同的槽位选择。返回已放置元素的可变引用以及被淘汰的元素（如果有）。
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::RingBuffer;
    ///
    /// struct Sample { a: i32, b: i32 }
    ///
    /// let mut buf: RingBuffer<Sample, 2> = RingBuffer::new();
    /// let (placed, evicted) = buf.emplace(|| Sample { a: 2, b: 5 });
    /// placed.b += 1;
    /// assert!(evicted.is_none());
    /// assert_eq!(buf[0].a, 2);
    /// assert_eq!(buf[0].b, 6);
    /// ```
    pub fn emplace<F>(&mut self, make: F) -> (&mut T, Option<T>)
    where
        F: FnOnce() -> T,
    {
        // Cursors only move once the value exists, so a panicking factory
        // leaves the buffer untouched.
        let (index, evicted) = self.place(make());
        (unsafe { self.slots.get_mut(index) }, evicted)
    }

    /// Remove and return the most recently written element
    ///
    /// 移除并返回最近写入的元素
    ///
    /// Returns `None` on an empty buffer without touching any state.
    ///
    /// 缓冲区为空时返回 `None`，不修改任何状态。
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            trace!("pop_back on empty ring buffer");
            return None;
        }

        self.tail = wrap_dec::<N>(self.tail);
        self.len -= 1;
        Some(unsafe { self.slots.read(self.tail) })
    }

    /// Remove and return the oldest element
    ///
    /// 移除并返回最旧的元素
    ///
    /// Returns `None` on an empty buffer without touching any state.
    ///
    /// 缓冲区为空时返回 `None`，不修改任何状态。
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<i32, 4> = RingBuffer::new();
    /// buf.push(1);
    /// buf.push(2);
    /// assert_eq!(buf.pop_front(), Some(1));
    /// assert_eq!(buf.pop_front(), Some(2));
    /// assert_eq!(buf.pop_front(), None);
    /// ```
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            trace!("pop_front on empty ring buffer");
            return None;
        }

        let index = self.head;
        self.head = wrap_inc::<N>(self.head);
        self.len -= 1;
        Some(unsafe { self.slots.read(index) })
    }

    #[inline]
    fn physical(&self, logical: usize) -> usize {
        wrap_add::<N>(self.head, logical)
    }

    /// Get the element at logical index `index` (0 = oldest)
    ///
    /// 获取逻辑索引 `index` 处的元素（0 = 最旧）
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(unsafe { self.slots.get(self.physical(index)) })
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let physical = self.physical(index);
            Some(unsafe { self.slots.get_mut(physical) })
        } else {
            None
        }
    }

    /// Oldest live element
    ///
    /// 最旧的存活元素
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Most recently written live element
    ///
    /// 最近写入的存活元素
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

    /// Empty the buffer and rewind both cursors to slot 0
    ///
    /// 清空缓冲区并将两个游标重置到槽位 0
    ///
    /// Live elements are dropped.
    ///
    /// 存活元素会被 drop。
    pub fn reset(&mut self) {
        self.drop_live();
        self.head = 0;
        self.tail = 0;
        self.len = 0;
    }

    fn drop_live(&mut self) {
        // Zero the length first so a panicking destructor leaks instead of
        // double dropping.
        let (head, len) = (self.head, self.len);
        self.len = 0;
        for offset in 0..len {
            unsafe { self.slots.drop_at(wrap_add::<N>(head, offset)) };
        }
    }

    /// Iterate from the oldest to the newest element
    ///
    /// 从最旧到最新迭代元素
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            buf: self,
            front: 0,
            back: self.len,
        }
    }
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    /// Push multiple elements from a slice
    ///
    /// 将切片中的多个元素批量推送到缓冲区
    ///
    /// Keeps overwrite semantics: if the slice is longer than the free space,
    /// the oldest elements are evicted, and if it is longer than N only its
    /// last N values survive.
    ///
    /// 保持覆盖语义：如果切片长度超过剩余空间，最旧的元素会被淘汰；如果超过 N，只保留最后 N 个值。
    ///
    /// # Returns
    ///
    /// Number of elements evicted (previously live elements plus leading
    /// slice values that never became visible)
    ///
    /// # 返回值
    ///
    /// 被淘汰的元素数量（原有存活元素加上从未可见的切片前部元素）
    ///
    /// # Examples
    ///
    /// ```
    /// use fixring::RingBuffer;
    ///
    /// let mut buf: RingBuffer<u8, 4> = RingBuffer::new();
    /// assert_eq!(buf.push_slice(&[1, 2, 3]), 0);
    /// assert_eq!(buf.push_slice(&[4, 5]), 1);
    /// assert_eq!(buf.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 5]);
    /// ```
    pub fn push_slice(&mut self, values: &[T]) -> usize {
        if values.is_empty() {
            return 0;
        }

        let evicted = (self.len + values.len()).saturating_sub(N);

        if values.len() >= N {
            // All old data is overwritten: keep the last N values from slot 0
            let kept = &values[values.len() - N..];
            unsafe { self.slots.copy_from_slice(0, kept) };
            self.head = 0;
            self.tail = 0;
            self.len = N;
        } else {
            unsafe { self.slots.copy_from_slice(self.tail, values) };
            self.tail = wrap_add::<N>(self.tail, values.len());
            if evicted > 0 {
                self.head = wrap_add::<N>(self.head, evicted);
            }
            self.len = (self.len + values.len()).min(N);
        }

        if evicted > 0 {
            trace!(capacity = N, evicted, "ring buffer batch push evicted elements");
        }
        evicted
    }

    /// Pop multiple elements from the front into a slice
    ///
    /// 从前端批量弹出多个元素到切片
    ///
    /// # Returns
    ///
    /// Number of elements popped (0 to `dest.len()`)
    ///
    /// # 返回值
    ///
    /// 弹出的元素数量（0 到 `dest.len()`）
    pub fn pop_slice(&mut self, dest: &mut [T]) -> usize {
        let count = dest.len().min(self.len);
        if count == 0 {
            return 0;
        }

        unsafe { self.slots.copy_to_slice(self.head, &mut dest[..count]) };
        self.head = wrap_add::<N>(self.head, count);
        self.len -= count;
        count
    }
}

impl<T, const N: usize> Drop for RingBuffer<T, N> {
    fn drop(&mut self) {
        self.drop_live();
    }
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for RingBuffer<T, N> {
    fn clone(&self) -> Self {
        let mut cloned = Self::new();
        for value in self.iter() {
            cloned.push(value.clone());
        }
        cloned
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for RingBuffer<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, const N: usize> Index<usize> for RingBuffer<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("index {index} out of bounds for ring buffer of length {}", self.len),
        }
    }
}

impl<T, const N: usize> IndexMut<usize> for RingBuffer<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("index {index} out of bounds for ring buffer of length {len}"),
        }
    }
}

impl<T, const N: usize> Extend<T> for RingBuffer<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`RingBuffer`], oldest first
///
/// [`RingBuffer`] 的借用迭代器，从最旧开始
pub struct Iter<'a, T, const N: usize> {
    buf: &'a RingBuffer<T, N>,
    front: usize,
    back: usize,
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let value = self.buf.get(self.front);
        self.front += 1;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.buf.get(self.back)
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}
