//! Inline slot storage shared by both containers
//!
//! 两种容器共享的内联槽位存储
//!
//! `Slots` owns `N` possibly-uninitialised slots of `T` embedded directly in
//! the container. It never tracks which slots are live: the owning container
//! does that through its own cursors and is responsible for dropping live
//! elements.
//!
//! `Slots` 直接在容器内嵌入 `N` 个可能未初始化的 `T` 槽位。
//! 它不跟踪哪些槽位存活：由所属容器通过自身游标管理，并负责 drop 存活元素。

use core::mem::MaybeUninit;
use core::ptr;

/// Fixed array of `N` uninitialised slots
///
/// `N` 个未初始化槽位的固定数组
pub struct Slots<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
}

impl<T, const N: usize> Slots<T, N> {
    /// Create storage with every slot uninitialised
    ///
    /// 创建所有槽位均未初始化的存储
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
        }
    }

    #[inline(always)]
    fn ptr(&self, index: usize) -> *const T {
        debug_assert!(index < N);
        unsafe { self.buf.as_ptr().add(index).cast::<T>() }
    }

    #[inline(always)]
    fn mut_ptr(&mut self, index: usize) -> *mut T {
        debug_assert!(index < N);
        unsafe { self.buf.as_mut_ptr().add(index).cast::<T>() }
    }

    /// Write a value into a slot and return a reference to it
    ///
    /// 向槽位写入值并返回其引用
    ///
    /// # Safety
    /// - `index` must be < N
    /// - The slot must not hold a live value (it would be leaked)
    ///
    /// # 安全性
    /// - `index` 必须 < N
    /// - 槽位不得持有存活值（否则会泄漏）
    #[inline]
    pub unsafe fn write(&mut self, index: usize, value: T) -> &mut T {
        let slot = self.mut_ptr(index);
        unsafe {
            slot.write(value);
            &mut *slot
        }
    }

    /// Move the value out of a slot, leaving it logically uninitialised
    ///
    /// 将值移出槽位，槽位在逻辑上变为未初始化
    ///
    /// # Safety
    /// - `index` must be < N
    /// - The slot must hold a live value, and the caller must stop treating it
    ///   as live afterwards
    ///
    /// # 安全性
    /// - `index` 必须 < N
    /// - 槽位必须持有存活值，且调用者此后不得再将其视为存活
    #[inline]
    pub unsafe fn read(&self, index: usize) -> T {
        unsafe { self.ptr(index).read() }
    }

    /// Replace a live value and return the old one
    ///
    /// 替换存活值并返回旧值
    ///
    /// # Safety
    /// - `index` must be < N
    /// - The slot must hold a live value
    #[inline]
    pub unsafe fn replace(&mut self, index: usize, value: T) -> T {
        unsafe { ptr::replace(self.mut_ptr(index), value) }
    }

    /// # Safety
    /// - `index` must be < N
    /// - The slot must hold a live value
    #[inline]
    pub unsafe fn get(&self, index: usize) -> &T {
        unsafe { &*self.ptr(index) }
    }

    /// # Safety
    /// - `index` must be < N
    /// - The slot must hold a live value
    #[inline]
    pub unsafe fn get_mut(&mut self, index: usize) -> &mut T {
        unsafe { &mut *self.mut_ptr(index) }
    }

    /// Drop the live value in a slot in place
    ///
    /// 原地 drop 槽位中的存活值
    ///
    /// # Safety
    /// - `index` must be < N
    /// - The slot must hold a live value, which is dead afterwards
    #[inline]
    pub unsafe fn drop_at(&mut self, index: usize) {
        unsafe { ptr::drop_in_place(self.mut_ptr(index)) }
    }

    /// Move `slots[0..len]` to `slots[1..len + 1]`
    ///
    /// 将 `slots[0..len]` 移动到 `slots[1..len + 1]`
    ///
    /// Slot 0 is logically uninitialised afterwards.
    ///
    /// # Safety
    /// - `len` must be < N
    #[inline]
    pub unsafe fn shift_up(&mut self, len: usize) {
        debug_assert!(len < N);
        if len == 0 {
            return;
        }
        let base = self.buf.as_mut_ptr().cast::<T>();
        // Ranges overlap: memmove semantics
        unsafe { ptr::copy(base, base.add(1), len) }
    }

    /// Move `slots[1..len]` to `slots[0..len - 1]`
    ///
    /// 将 `slots[1..len]` 移动到 `slots[0..len - 1]`
    ///
    /// Slot `len - 1` is logically uninitialised afterwards. The value that
    /// lived in slot 0 must already have been moved out.
    ///
    /// # Safety
    /// - `1 <= len <= N`
    #[inline]
    pub unsafe fn shift_down(&mut self, len: usize) {
        debug_assert!(len >= 1 && len <= N);
        if len <= 1 {
            return;
        }
        let base = self.buf.as_mut_ptr().cast::<T>();
        unsafe { ptr::copy(base.add(1), base, len - 1) }
    }
}

/// Batch copy operations for Copy types
///
/// Copy 类型的批量拷贝操作
impl<T: Copy, const N: usize> Slots<T, N> {
    /// Copy a slice into the storage starting at `start`, wrapping at N
    ///
    /// 从 `start` 开始将切片拷贝到存储中，在 N 处环绕
    ///
    /// Splits into at most two contiguous copies.
    ///
    /// 最多分成两次连续拷贝。
    ///
    /// # Safety
    /// - `start` must be < N
    /// - `values.len()` must be <= N
    pub unsafe fn copy_from_slice(&mut self, start: usize, values: &[T]) {
        let count = values.len();
        if count == 0 {
            return;
        }
        debug_assert!(start < N && count <= N);

        unsafe {
            let base = self.buf.as_mut_ptr().cast::<T>();
            if count <= N - start {
                // No wrap-around: single continuous copy
                // 无环绕：单次连续拷贝
                ptr::copy_nonoverlapping(values.as_ptr(), base.add(start), count);
            } else {
                // Wrap-around: two copies
                // 环绕：两次拷贝
                let first_part = N - start;
                let second_part = count - first_part;
                ptr::copy_nonoverlapping(values.as_ptr(), base.add(start), first_part);
                ptr::copy_nonoverlapping(values.as_ptr().add(first_part), base, second_part);
            }
        }
    }

    /// Copy `dest.len()` elements out of the storage starting at `start`,
    /// wrapping at N
    ///
    /// 从 `start` 开始拷贝 `dest.len()` 个元素到切片，在 N 处环绕
    ///
    /// # Safety
    /// - `start` must be < N
    /// - `dest.len()` must be <= N
    /// - Every slot read must hold a live value
    pub unsafe fn copy_to_slice(&self, start: usize, dest: &mut [T]) {
        let count = dest.len();
        if count == 0 {
            return;
        }
        debug_assert!(start < N && count <= N);

        unsafe {
            let base = self.buf.as_ptr().cast::<T>();
            if count <= N - start {
                ptr::copy_nonoverlapping(base.add(start), dest.as_mut_ptr(), count);
            } else {
                let first_part = N - start;
                let second_part = count - first_part;
                ptr::copy_nonoverlapping(base.add(start), dest.as_mut_ptr(), first_part);
                ptr::copy_nonoverlapping(base, dest.as_mut_ptr().add(first_part), second_part);
            }
        }
    }
}

// Note: Slots does NOT implement Drop because it stores MaybeUninit<T>.
// The owning container drops its live elements.
//
// 注意：Slots 不实现 Drop，因为它存储 MaybeUninit<T>。
// 由所属容器负责 drop 存活元素。

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read() {
        let mut slots: Slots<i32, 4> = Slots::new();

        unsafe {
            *slots.write(2, 42) += 1;
            assert_eq!(*slots.get(2), 43);
            assert_eq!(slots.read(2), 43);
        }
    }

    #[test]
    fn test_replace() {
        let mut slots: Slots<i32, 4> = Slots::new();

        unsafe {
            slots.write(0, 1);
            assert_eq!(slots.replace(0, 2), 1);
            assert_eq!(slots.read(0), 2);
        }
    }

    #[test]
    fn test_shift_up_and_down() {
        let mut slots: Slots<i32, 4> = Slots::new();

        unsafe {
            slots.write(0, 10);
            slots.write(1, 20);
            slots.write(2, 30);

            slots.shift_up(3);
            slots.write(0, 5);
            assert_eq!(*slots.get(0), 5);
            assert_eq!(*slots.get(1), 10);
            assert_eq!(*slots.get(2), 20);
            assert_eq!(*slots.get(3), 30);

            assert_eq!(slots.read(0), 5);
            slots.shift_down(4);
            assert_eq!(*slots.get(0), 10);
            assert_eq!(*slots.get(1), 20);
            assert_eq!(*slots.get(2), 30);
        }
    }

    #[test]
    fn test_batch_copy_no_wrap() {
        let mut slots: Slots<i32, 8> = Slots::new();

        unsafe {
            slots.copy_from_slice(0, &[1, 2, 3, 4]);

            let mut dest = [0i32; 4];
            slots.copy_to_slice(0, &mut dest);
            assert_eq!(dest, [1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_batch_copy_with_wrap() {
        let mut slots: Slots<i32, 4> = Slots::new();

        unsafe {
            // Write starting at index 3 (will wrap around)
            slots.copy_from_slice(3, &[1, 2, 3]);

            assert_eq!(*slots.get(3), 1);
            assert_eq!(*slots.get(0), 2);
            assert_eq!(*slots.get(1), 3);

            let mut dest = [0i32; 3];
            slots.copy_to_slice(3, &mut dest);
            assert_eq!(dest, [1, 2, 3]);
        }
    }
}
