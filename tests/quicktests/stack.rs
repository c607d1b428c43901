use classic_ds::error::EmptyStackError;
use classic_ds::stack::Stack;

use crate::StackOp;

/// Applies the operations to a stack and a `Vec`, checking they agree after every step.
#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<StackOp<i8>>) -> bool {
    let mut stack = Stack::new();
    let mut model = Vec::new();

    ops.into_iter().all(|op| {
        let agreed = match op {
            StackOp::Push(x) => {
                stack.push(x);
                model.push(x);
                true
            }
            StackOp::Pop => stack.pop().ok() == model.pop(),
            StackOp::Peek => stack.peek().ok() == model.last(),
        };
        agreed && stack.size() == model.len() && stack.is_empty() == model.is_empty()
    })
}

#[quickcheck]
fn pops_reverse_pushes(xs: Vec<i8>) -> bool {
    let mut stack: Stack<_> = xs.iter().copied().collect();
    let popped: Vec<_> = std::iter::from_fn(|| stack.pop().ok()).collect();

    popped.into_iter().eq(xs.into_iter().rev())
}

#[quickcheck]
fn size_is_pushes_minus_pops(xs: Vec<i8>, pops: usize) -> bool {
    let mut stack: Stack<_> = xs.iter().copied().collect();
    let pops = pops % (xs.len() + 1);
    for _ in 0..pops {
        if stack.pop().is_err() {
            return false;
        }
    }

    stack.size() == xs.len() - pops
}

#[quickcheck]
fn drained_stack_always_errors(xs: Vec<i8>) -> bool {
    let mut stack: Stack<_> = xs.into_iter().collect();
    while stack.pop().is_ok() {}

    stack.pop() == Err(EmptyStackError) && stack.peek() == Err(EmptyStackError)
}
