//! Queue optimization modes
//!
//! 队列优化模式
//!
//! A [`BoundedQueue`](crate::BoundedQueue) keeps its live elements in a
//! contiguous prefix of its storage. One end of the queue is therefore always
//! O(1) and the other pays an O(len) shift. The marker type parameter picks
//! which end is cheap:
//!
//! - [`WriteOptimized`]: `push` appends in O(1), `pop` shifts the rest down.
//! - [`ReadOptimized`]: `push` shifts the rest up, `pop` drops the last slot in O(1).
//!
//! 队列的存活元素始终占据存储的连续前缀，因此一端总是 O(1)，另一端需要 O(len) 的移动。
//! 标记类型参数选择哪一端更廉价。
//!
//! ```
//! use fixring::{BoundedQueue, QueueOptimization, ReadOptimized};
//!
//! let queue: BoundedQueue<u32, 8, ReadOptimized> = BoundedQueue::new();
//! assert_eq!(queue.optimized_for(), QueueOptimization::Read);
//! ```

use crate::slots::Slots;

/// Value-level mirror of the queue marker types
///
/// 队列标记类型在值层面的对应
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueOptimization {
    /// `push` is O(1)
    Write,
    /// `pop` is O(1)
    Read,
}

/// Marker trait for queue optimization modes
///
/// 队列优化模式的标记 trait
///
/// Sealed: only [`WriteOptimized`] and [`ReadOptimized`] implement it.
pub trait Optimization: sealed::Layout {
    /// The mode this marker stands for
    const KIND: QueueOptimization;
}

/// `push` appends in O(1); `pop` shifts the remaining elements down
///
/// `push` 以 O(1) 追加；`pop` 将剩余元素向下移动
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WriteOptimized;

/// `pop` is O(1); `push` shifts the existing elements up
///
/// `pop` 为 O(1)；`push` 将已有元素向上移动
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReadOptimized;

impl Optimization for WriteOptimized {
    const KIND: QueueOptimization = QueueOptimization::Write;
}

impl Optimization for ReadOptimized {
    const KIND: QueueOptimization = QueueOptimization::Read;
}

pub(crate) mod sealed {
    use super::{ReadOptimized, Slots, WriteOptimized};

    /// Physical layout of the live prefix, dispatched at compile time
    ///
    /// 存活前缀的物理布局，在编译期分发
    ///
    /// Every function receives the current length and operates on
    /// `slots[0..len]`; the queue updates its length afterwards.
    pub trait Layout {
        /// Physical slot of logical position `logical` (0 = front)
        ///
        /// Requires `logical < len`.
        fn physical(len: usize, logical: usize) -> usize;

        /// Insert `value` as the new back element
        ///
        /// # Safety
        /// - `len < N`
        /// - `slots[0..len]` live
        unsafe fn insert<T, const N: usize>(slots: &mut Slots<T, N>, len: usize, value: T);

        /// Move the front element out and close the gap
        ///
        /// # Safety
        /// - `1 <= len <= N`
        /// - `slots[0..len]` live
        unsafe fn remove_front<T, const N: usize>(slots: &mut Slots<T, N>, len: usize) -> T;
    }

    impl Layout for WriteOptimized {
        #[inline(always)]
        fn physical(_len: usize, logical: usize) -> usize {
            logical
        }

        #[inline]
        unsafe fn insert<T, const N: usize>(slots: &mut Slots<T, N>, len: usize, value: T) {
            unsafe { slots.write(len, value) };
        }

        #[inline]
        unsafe fn remove_front<T, const N: usize>(slots: &mut Slots<T, N>, len: usize) -> T {
            unsafe {
                let front = slots.read(0);
                slots.shift_down(len);
                front
            }
        }
    }

    impl Layout for ReadOptimized {
        #[inline(always)]
        fn physical(len: usize, logical: usize) -> usize {
            len - 1 - logical
        }

        #[inline]
        unsafe fn insert<T, const N: usize>(slots: &mut Slots<T, N>, len: usize, value: T) {
            unsafe {
                slots.shift_up(len);
                slots.write(0, value);
            }
        }

        #[inline]
        unsafe fn remove_front<T, const N: usize>(slots: &mut Slots<T, N>, len: usize) -> T {
            unsafe { slots.read(len - 1) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::sealed::Layout;
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(WriteOptimized::KIND, QueueOptimization::Write);
        assert_eq!(ReadOptimized::KIND, QueueOptimization::Read);
    }

    #[test]
    fn test_physical_mapping() {
        // Front is slot 0 when writes are cheap, slot len - 1 when reads are
        assert_eq!(WriteOptimized::physical(3, 0), 0);
        assert_eq!(WriteOptimized::physical(3, 2), 2);
        assert_eq!(ReadOptimized::physical(3, 0), 2);
        assert_eq!(ReadOptimized::physical(3, 2), 0);
    }

    #[test]
    fn test_layouts_agree_on_order() {
        let mut write_slots: Slots<i32, 4> = Slots::new();
        let mut read_slots: Slots<i32, 4> = Slots::new();

        for (len, value) in [10, 20, 30].into_iter().enumerate() {
            unsafe {
                WriteOptimized::insert(&mut write_slots, len, value);
                ReadOptimized::insert(&mut read_slots, len, value);
            }
        }

        unsafe {
            assert_eq!(WriteOptimized::remove_front(&mut write_slots, 3), 10);
            assert_eq!(ReadOptimized::remove_front(&mut read_slots, 3), 10);
            assert_eq!(WriteOptimized::remove_front(&mut write_slots, 2), 20);
            assert_eq!(ReadOptimized::remove_front(&mut read_slots, 2), 20);
            assert_eq!(WriteOptimized::remove_front(&mut write_slots, 1), 30);
            assert_eq!(ReadOptimized::remove_front(&mut read_slots, 1), 30);
        }
    }
}
