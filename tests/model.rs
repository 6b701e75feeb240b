//! Model tests: random operation sequences checked against `VecDeque`

use fixring::{BoundedQueue, Optimization, ReadOptimized, RingBuffer, WriteOptimized};
use proptest::prelude::*;
use std::collections::VecDeque;

const CAPACITY: usize = 5;

#[derive(Debug, Clone)]
enum RingOp {
    Push(i32),
    PopFront,
    PopBack,
    Get(u8),
    PushSlice(Vec<i32>),
    PopSlice(u8),
    Reset,
}

fn ring_op() -> impl Strategy<Value = RingOp> {
    prop_oneof![
        4 => any::<i32>().prop_map(RingOp::Push),
        2 => Just(RingOp::PopFront),
        2 => Just(RingOp::PopBack),
        1 => any::<u8>().prop_map(RingOp::Get),
        1 => prop::collection::vec(any::<i32>(), 0..12).prop_map(RingOp::PushSlice),
        1 => (0u8..8).prop_map(RingOp::PopSlice),
        1 => Just(RingOp::Reset),
    ]
}

#[derive(Debug, Clone)]
enum QueueOp {
    Push(i32),
    Pop,
    CopyAndPop,
    Clear,
}

fn queue_op() -> impl Strategy<Value = QueueOp> {
    prop_oneof![
        4 => any::<i32>().prop_map(QueueOp::Push),
        2 => Just(QueueOp::Pop),
        2 => Just(QueueOp::CopyAndPop),
        1 => Just(QueueOp::Clear),
    ]
}

fn check_queue<M: Optimization>(ops: &[QueueOp]) -> Result<(), TestCaseError> {
    let mut queue: BoundedQueue<i32, CAPACITY, M> = BoundedQueue::new();
    let mut model: VecDeque<i32> = VecDeque::with_capacity(CAPACITY);

    for op in ops {
        match op {
            QueueOp::Push(v) => {
                let was_full = model.len() == CAPACITY;
                let result = queue.push(*v);
                if was_full {
                    prop_assert_eq!(result.map_err(|e| e.into_inner()), Err(*v));
                } else {
                    prop_assert!(result.is_ok());
                    model.push_back(*v);
                }
            }
            QueueOp::Pop => {
                queue.pop();
                model.pop_front();
            }
            QueueOp::CopyAndPop => {
                prop_assert_eq!(queue.copy_and_pop(), model.pop_front());
            }
            QueueOp::Clear => {
                queue.clear();
                model.clear();
            }
        }

        prop_assert!(queue.len() <= queue.capacity());
        prop_assert_eq!(queue.len(), model.len());
        prop_assert_eq!(queue.front(), model.front());
        prop_assert_eq!(queue.back(), model.back());
        prop_assert!(queue.iter().eq(model.iter()));
    }

    Ok(())
}

proptest! {
    #[test]
    fn ring_buffer_matches_vecdeque(ops in prop::collection::vec(ring_op(), 1..200)) {
        let mut buf: RingBuffer<i32, CAPACITY> = RingBuffer::new();
        let mut model: VecDeque<i32> = VecDeque::with_capacity(CAPACITY);

        for op in ops {
            match op {
                RingOp::Push(v) => {
                    let expected = if model.len() == CAPACITY {
                        model.pop_front()
                    } else {
                        None
                    };
                    model.push_back(v);
                    prop_assert_eq!(buf.push(v), expected);
                }
                RingOp::PopFront => {
                    prop_assert_eq!(buf.pop_front(), model.pop_front());
                }
                RingOp::PopBack => {
                    prop_assert_eq!(buf.pop_back(), model.pop_back());
                }
                RingOp::Get(i) => {
                    let i = usize::from(i) % (CAPACITY + 2);
                    prop_assert_eq!(buf.get(i), model.get(i));
                }
                RingOp::PushSlice(values) => {
                    let mut expected_evicted = 0;
                    for v in &values {
                        if model.len() == CAPACITY {
                            model.pop_front();
                            expected_evicted += 1;
                        }
                        model.push_back(*v);
                    }
                    prop_assert_eq!(buf.push_slice(&values), expected_evicted);
                }
                RingOp::PopSlice(n) => {
                    let mut dest = vec![0i32; usize::from(n)];
                    let popped = buf.pop_slice(&mut dest);
                    let expected: Vec<i32> =
                        (0..usize::from(n)).map_while(|_| model.pop_front()).collect();
                    prop_assert_eq!(&dest[..popped], &expected[..]);
                }
                RingOp::Reset => {
                    buf.reset();
                    model.clear();
                }
            }

            prop_assert!(buf.len() <= buf.capacity());
            prop_assert_eq!(buf.len(), model.len());
            prop_assert_eq!(buf.is_full(), model.len() == CAPACITY);
            prop_assert_eq!(buf.front(), model.front());
            prop_assert_eq!(buf.back(), model.back());
            prop_assert!(buf.iter().eq(model.iter()));
        }
    }

    #[test]
    fn write_optimized_queue_matches_vecdeque(ops in prop::collection::vec(queue_op(), 1..200)) {
        check_queue::<WriteOptimized>(&ops)?;
    }

    #[test]
    fn read_optimized_queue_matches_vecdeque(ops in prop::collection::vec(queue_op(), 1..200)) {
        check_queue::<ReadOptimized>(&ops)?;
    }
}
