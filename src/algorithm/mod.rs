//! Implicit-dispatch algorithm entry points
//!
//! Each function takes tagged sequences ([`Buffer`](crate::buffer::Buffer),
//! [`View`](crate::buffer::View), ...) and runs the implementation of the
//! system named by the data sequence's tag, using that system's default client
//! for the sequence's device. Stencils must carry the same tag; this is
//! checked at compile time.
//!
//! To pick a system explicitly instead, call the [`CountOps`] / [`RemoveOps`]
//! methods on a client directly.
//!
//! ```text
//! algorithm::count(&buffer, value)
//!     │  S::System = CpuRuntime
//!     ▼
//! CpuRuntime::default_client(buffer.device()).count(buffer.as_slice(), value)
//! ```

use crate::buffer::{Sequence, SequenceMut};
use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::{CountOps, EqualTo, Output, Predicate, RemoveOps};
use crate::runtime::Runtime;

type ClientOf<S> = <<S as Sequence>::System as Runtime>::Client;

/// Resolve the client selected by a sequence's tag
fn client_for<S: Sequence + ?Sized>(seq: &S) -> ClientOf<S> {
    <S::System as Runtime>::default_client(seq.device())
}

fn trace_dispatch<S: Sequence + ?Sized>(op: &str, seq: &S) {
    log::trace!(
        "{op}: system={} dtype={} len={}",
        <S::System as Runtime>::name(),
        <S::Elem as Element>::DTYPE,
        seq.len()
    );
}

/// Number of elements of `data` equal to `value`
///
/// ```ignore
/// let data = Buffer::<i32, CpuRuntime>::from_slice(&[1, 1, 0, 0, 1], &device);
/// assert_eq!(sift::algorithm::count(&data, 0)?, 2);
/// ```
pub fn count<S>(data: &S, value: S::Elem) -> Result<usize>
where
    S: Sequence + ?Sized,
    ClientOf<S>: CountOps<S::System>,
{
    trace_dispatch("count", data);
    client_for(data).count(data.as_slice(), value)
}

/// Number of elements of `data` satisfying `pred`
pub fn count_if<S, P>(data: &S, pred: P) -> Result<usize>
where
    S: Sequence + ?Sized,
    P: Predicate<S::Elem>,
    ClientOf<S>: CountOps<S::System>,
{
    trace_dispatch("count_if", data);
    client_for(data).count_if(data.as_slice(), pred)
}

/// Stably remove every element equal to `value`; returns the new logical length
pub fn remove<S>(data: &mut S, value: S::Elem) -> Result<usize>
where
    S: SequenceMut + ?Sized,
    ClientOf<S>: RemoveOps<S::System>,
{
    trace_dispatch("remove", data);
    let client = client_for(data);
    client.remove(data.as_mut_slice(), value)
}

/// Stably remove every element satisfying `pred`; returns the new logical length
pub fn remove_if<S, P>(data: &mut S, pred: P) -> Result<usize>
where
    S: SequenceMut + ?Sized,
    P: Predicate<S::Elem>,
    ClientOf<S>: RemoveOps<S::System>,
{
    trace_dispatch("remove_if", data);
    let client = client_for(data);
    client.remove_if(data.as_mut_slice(), pred)
}

/// Stably remove every `data[i]` for which `pred(stencil[i])` holds
pub fn remove_if_stencil<S, St, P>(data: &mut S, stencil: &St, pred: P) -> Result<usize>
where
    S: SequenceMut + ?Sized,
    St: Sequence<System = S::System> + ?Sized,
    P: Predicate<St::Elem>,
    ClientOf<S>: RemoveOps<S::System>,
{
    trace_dispatch("remove_if_stencil", data);
    let client = client_for(data);
    client.remove_if_stencil(data.as_mut_slice(), stencil.as_slice(), pred)
}

/// Copy every element of `input` not equal to `value` into `output`
///
/// Returns the output end position.
pub fn remove_copy<S, O>(input: &S, output: &mut O, value: S::Elem) -> Result<usize>
where
    S: Sequence + ?Sized,
    O: Output<S::Elem> + ?Sized,
    ClientOf<S>: RemoveOps<S::System>,
{
    trace_dispatch("remove_copy", input);
    client_for(input).remove_copy(input.as_slice(), output, value)
}

/// Copy every element of `input` not satisfying `pred` into `output`
pub fn remove_copy_if<S, O, P>(input: &S, output: &mut O, pred: P) -> Result<usize>
where
    S: Sequence + ?Sized,
    O: Output<S::Elem> + ?Sized,
    P: Predicate<S::Elem>,
    ClientOf<S>: RemoveOps<S::System>,
{
    trace_dispatch("remove_copy_if", input);
    client_for(input).remove_copy_if(input.as_slice(), output, pred)
}

/// Copy every `input[i]` for which `pred(stencil[i])` fails into `output`
pub fn remove_copy_if_stencil<S, St, O, P>(
    input: &S,
    stencil: &St,
    output: &mut O,
    pred: P,
) -> Result<usize>
where
    S: Sequence + ?Sized,
    St: Sequence<System = S::System> + ?Sized,
    O: Output<S::Elem> + ?Sized,
    P: Predicate<St::Elem>,
    ClientOf<S>: RemoveOps<S::System>,
{
    trace_dispatch("remove_copy_if_stencil", input);
    client_for(input).remove_copy_if_stencil(input.as_slice(), stencil.as_slice(), output, pred)
}

/// Number of elements a removal of `value` would keep
///
/// Equivalent to `data.len() - count(data, value)`. A system whose count
/// exceeds the length yields [`Error::Backend`].
pub fn retained_len<S>(data: &S, value: S::Elem) -> Result<usize>
where
    S: Sequence + ?Sized,
    ClientOf<S>: CountOps<S::System>,
{
    trace_dispatch("retained_len", data);
    let removed = client_for(data).count_if(data.as_slice(), EqualTo(value))?;
    data.len().checked_sub(removed).ok_or_else(|| {
        Error::Backend(format!(
            "{}: count_if reported {removed} matches in {} elements",
            <S::System as Runtime>::name(),
            data.len()
        ))
    })
}
