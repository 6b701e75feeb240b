//! Cursor arithmetic shared by the ring buffer
//!
//! 环形缓冲区共享的游标运算
//!
//! Capacities are arbitrary (not rounded to a power of two), so wrapping is a
//! compare-and-reset rather than a mask. Every function here assumes the
//! incoming cursor is already in `[0, N)` and `N > 0`.
//!
//! 容量可以是任意值（不取整到 2 的幂次），因此环绕采用比较并重置而不是掩码。
//! 这里的所有函数都假定传入游标已在 `[0, N)` 内且 `N > 0`。

/// Advance a cursor by one slot, wrapping to 0 at N
///
/// 游标前进一个槽位，到 N 时环绕回 0
#[inline(always)]
pub const fn wrap_inc<const N: usize>(index: usize) -> usize {
    if index + 1 == N {
        0
    } else {
        index + 1
    }
}

/// Move a cursor back by one slot, wrapping from 0 to N - 1
///
/// 游标后退一个槽位，从 0 环绕到 N - 1
#[inline(always)]
pub const fn wrap_dec<const N: usize>(index: usize) -> usize {
    if index == 0 {
        N - 1
    } else {
        index - 1
    }
}

/// Map a logical offset from `base` to a physical slot
///
/// 将相对 `base` 的逻辑偏移映射到物理槽位
///
/// `offset` must be <= N so the sum cannot overflow before the wrap.
#[inline(always)]
pub const fn wrap_add<const N: usize>(base: usize, offset: usize) -> usize {
    debug_assert!(offset <= N);
    let sum = base + offset;
    if sum >= N {
        sum - N
    } else {
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_inc() {
        assert_eq!(wrap_inc::<4>(0), 1);
        assert_eq!(wrap_inc::<4>(2), 3);
        assert_eq!(wrap_inc::<4>(3), 0);
        assert_eq!(wrap_inc::<1>(0), 0);
    }

    #[test]
    fn test_wrap_dec() {
        assert_eq!(wrap_dec::<4>(3), 2);
        assert_eq!(wrap_dec::<4>(1), 0);
        assert_eq!(wrap_dec::<4>(0), 3);
        assert_eq!(wrap_dec::<1>(0), 0);
    }

    #[test]
    fn test_wrap_add() {
        assert_eq!(wrap_add::<5>(0, 4), 4);
        assert_eq!(wrap_add::<5>(3, 1), 4);
        assert_eq!(wrap_add::<5>(3, 2), 0);
        assert_eq!(wrap_add::<5>(4, 4), 3);
        assert_eq!(wrap_add::<5>(2, 5), 2);
    }
}
