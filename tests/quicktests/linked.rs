use classic_ds::error::Status;
use classic_ds::linked::LinkedList;

use crate::ListOp;

/// Applies an operation to the `Vec` model, returning the status the list should report.
fn apply_to_model(op: ListOp<i8>, model: &mut Vec<i8>) -> Status {
    match op {
        ListOp::InsertAtBeginning(x) => {
            model.insert(0, x);
            Status::Ok
        }
        ListOp::InsertAtEnd(x) => {
            model.push(x);
            Status::Ok
        }
        ListOp::InsertAtPosition(x, p) if p <= 0 => {
            apply_to_model(ListOp::InsertAtBeginning(x), model)
        }
        ListOp::InsertAtPosition(x, p) if (p as usize) <= model.len() => {
            model.insert(p as usize, x);
            Status::Ok
        }
        ListOp::InsertAtPosition(..) => Status::PositionOutOfRange,
        ListOp::DeleteAtBeginning | ListOp::DeleteAtEnd if model.is_empty() => Status::EmptyList,
        ListOp::DeleteAtBeginning => {
            model.remove(0);
            Status::Ok
        }
        ListOp::DeleteAtEnd => {
            model.pop();
            Status::Ok
        }
        ListOp::DeleteAtPosition(p) if p <= 0 => apply_to_model(ListOp::DeleteAtBeginning, model),
        ListOp::DeleteAtPosition(_) if model.is_empty() => Status::EmptyList,
        ListOp::DeleteAtPosition(p) if (p as usize) < model.len() => {
            model.remove(p as usize);
            Status::Ok
        }
        ListOp::DeleteAtPosition(_) => Status::PositionOutOfRange,
        ListOp::Search(_) => Status::Ok,
    }
}

fn apply_to_list(op: ListOp<i8>, list: &mut LinkedList<i8>) -> Status {
    match op {
        ListOp::InsertAtBeginning(x) => {
            list.insert_at_beginning(x);
            Status::Ok
        }
        ListOp::InsertAtEnd(x) => {
            list.insert_at_end(x);
            Status::Ok
        }
        ListOp::InsertAtPosition(x, p) => list.insert_at_position(x, p),
        ListOp::DeleteAtBeginning => list.delete_at_beginning(),
        ListOp::DeleteAtEnd => list.delete_at_end(),
        ListOp::DeleteAtPosition(p) => list.delete_at_position(p),
        ListOp::Search(_) => Status::Ok,
    }
}

/// Applies the operations to a list and a `Vec`, checking statuses, searches and contents agree
/// after every step.
#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<ListOp<i8>>) -> bool {
    let mut list = LinkedList::new();
    let mut model = Vec::new();

    ops.into_iter().all(|op| {
        let searched = match op {
            ListOp::Search(x) => list.search(&x) == model.iter().position(|y| *y == x),
            _ => true,
        };
        let statuses = apply_to_list(op, &mut list) == apply_to_model(op, &mut model);

        searched
            && statuses
            && list.traverse().eq(model.iter())
            && list.len() == model.len()
            && list.is_empty() == model.is_empty()
    })
}

#[quickcheck]
fn insert_at_beginning_is_found_first(xs: Vec<i8>, x: i8) -> bool {
    let mut list: LinkedList<_> = xs.into_iter().collect();
    list.insert_at_beginning(x);

    list.search(&x) == Some(0)
}

#[quickcheck]
fn rejected_positions_leave_the_list_alone(xs: Vec<i8>, past_end: u8) -> bool {
    let mut list: LinkedList<_> = xs.iter().copied().collect();
    let position = (xs.len() + 1 + past_end as usize) as isize;

    list.insert_at_position(0, position).is_position_out_of_range()
        && list.traverse().eq(xs.iter())
}

#[quickcheck]
fn collect_preserves_order(xs: Vec<i8>) -> bool {
    let list: LinkedList<_> = xs.iter().copied().collect();

    list.traverse().eq(xs.iter())
}
