//! Dispatch tests with user-defined systems
//!
//! Explicit dispatch: algorithms called on a client run that client's
//! implementation. Implicit dispatch: algorithms called on tagged sequences
//! run the implementation of the system named by the tag.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use sift::algorithm;
use sift::buffer::{Buffer, retag, retag_mut};
use sift::dtype::Element;
use sift::error::{Error, Result};
use sift::ops::{CountOps, Discard, IsTrue, Output, Predicate, RemoveOps, Slots};
use sift::runtime::host::{HostDevice, HostRuntime};
use sift::runtime::{Device, Runtime, RuntimeClient};

#[derive(Clone, Debug, Default)]
struct UnitDevice;

impl Device for UnitDevice {
    fn id(&self) -> usize {
        0
    }
}

// ============================================================================
// Explicit dispatch
// ============================================================================

/// A system whose client records that it was asked to run something
#[derive(Clone, Debug, Default)]
struct MyRuntime;

#[derive(Clone, Debug, Default)]
struct MySystem {
    device: UnitDevice,
    dispatched: Arc<AtomicBool>,
}

impl MySystem {
    fn validate_dispatch(&self) {
        self.dispatched.store(true, Ordering::SeqCst);
    }

    fn was_dispatched(&self) -> bool {
        self.dispatched.swap(false, Ordering::SeqCst)
    }
}

impl Runtime for MyRuntime {
    type Device = UnitDevice;
    type Client = MySystem;

    fn name() -> &'static str {
        "my-system"
    }

    fn default_device() -> UnitDevice {
        UnitDevice
    }

    fn default_client(_device: &UnitDevice) -> MySystem {
        MySystem::default()
    }
}

impl RuntimeClient<MyRuntime> for MySystem {
    fn device(&self) -> &UnitDevice {
        &self.device
    }

    fn synchronize(&self) {}
}

impl CountOps<MyRuntime> for MySystem {
    fn count<T: Element>(&self, _data: &[T], _value: T) -> Result<usize> {
        self.validate_dispatch();
        Ok(13)
    }

    fn count_if<T: Element, P: Predicate<T>>(&self, _data: &[T], _pred: P) -> Result<usize> {
        self.validate_dispatch();
        Ok(13)
    }
}

impl RemoveOps<MyRuntime> for MySystem {
    fn remove<T: Element>(&self, _data: &mut [T], _value: T) -> Result<usize> {
        self.validate_dispatch();
        Ok(0)
    }

    fn remove_if<T: Element, P: Predicate<T>>(&self, _data: &mut [T], _pred: P) -> Result<usize> {
        self.validate_dispatch();
        Ok(0)
    }

    fn remove_if_stencil<T: Element, S: Element, P: Predicate<S>>(
        &self,
        _data: &mut [T],
        _stencil: &[S],
        _pred: P,
    ) -> Result<usize> {
        self.validate_dispatch();
        Ok(0)
    }

    fn remove_copy<T: Element, O: Output<T> + ?Sized>(
        &self,
        _input: &[T],
        _output: &mut O,
        _value: T,
    ) -> Result<usize> {
        self.validate_dispatch();
        Ok(0)
    }

    fn remove_copy_if<T: Element, O: Output<T> + ?Sized, P: Predicate<T>>(
        &self,
        _input: &[T],
        _output: &mut O,
        _pred: P,
    ) -> Result<usize> {
        self.validate_dispatch();
        Ok(0)
    }

    fn remove_copy_if_stencil<T: Element, S: Element, O: Output<T> + ?Sized, P: Predicate<S>>(
        &self,
        _input: &[T],
        _stencil: &[S],
        _output: &mut O,
        _pred: P,
    ) -> Result<usize> {
        self.validate_dispatch();
        Ok(0)
    }
}

#[test]
fn test_count_dispatch_explicit() {
    let system = MySystem::default();
    let vec = vec![0i32; 1];

    assert_eq!(system.count(&vec, 0).unwrap(), 13);
    assert!(system.was_dispatched());

    system.count_if(&vec, IsTrue).unwrap();
    assert!(system.was_dispatched());
}

#[test]
fn test_remove_dispatch_explicit() {
    let system = MySystem::default();
    let mut vec = vec![0i32; 1];
    let stencil = vec![0u8; 1];
    let mut result = vec![0i32; 1];

    system.remove(&mut vec, 0).unwrap();
    assert!(system.was_dispatched());

    system.remove_if(&mut vec, IsTrue).unwrap();
    assert!(system.was_dispatched());

    system.remove_if_stencil(&mut vec, &stencil, IsTrue).unwrap();
    assert!(system.was_dispatched());

    system.remove_copy(&vec, &mut result, 0).unwrap();
    assert!(system.was_dispatched());

    system.remove_copy_if(&vec, &mut Discard::new(), IsTrue).unwrap();
    assert!(system.was_dispatched());

    system
        .remove_copy_if_stencil(&vec, &stencil, &mut result, IsTrue)
        .unwrap();
    assert!(system.was_dispatched());
}

#[test]
fn test_explicit_client_ignores_sequence_tag() {
    // Host-tagged data handed straight to another client runs that client.
    let data = Buffer::<i32, HostRuntime>::from_slice(&[1, 2, 3], &HostDevice::new());
    let system = MySystem::default();
    assert_eq!(system.count(data.as_slice(), 2).unwrap(), 13);
    assert!(system.was_dispatched());
}

// ============================================================================
// Implicit dispatch
// ============================================================================

/// A tag whose implementation leaves a recognizable mark
#[derive(Clone, Debug, Default)]
struct MyTag;

#[derive(Clone, Debug, Default)]
struct MyTagClient {
    device: UnitDevice,
}

impl Runtime for MyTag {
    type Device = UnitDevice;
    type Client = MyTagClient;

    fn name() -> &'static str {
        "my-tag"
    }

    fn default_device() -> UnitDevice {
        UnitDevice
    }

    fn default_client(_device: &UnitDevice) -> MyTagClient {
        MyTagClient::default()
    }
}

impl RuntimeClient<MyTag> for MyTagClient {
    fn device(&self) -> &UnitDevice {
        &self.device
    }

    fn synchronize(&self) {}
}

fn mark<T: Element>(data: &mut [T]) -> usize {
    if let Some(first) = data.first_mut() {
        *first = T::from_f64(13.0);
    }
    data.len()
}

fn mark_output<T: Element, O: Output<T> + ?Sized>(output: &mut O) -> usize {
    match output.slots() {
        Slots::Store(dst) => mark(dst),
        Slots::Discard(position) => {
            *position = 13;
            13
        }
    }
}

impl CountOps<MyTag> for MyTagClient {
    fn count<T: Element>(&self, _data: &[T], value: T) -> Result<usize> {
        Ok(value.to_f64() as usize)
    }

    fn count_if<T: Element, P: Predicate<T>>(&self, _data: &[T], _pred: P) -> Result<usize> {
        Ok(13)
    }
}

impl RemoveOps<MyTag> for MyTagClient {
    fn remove<T: Element>(&self, data: &mut [T], _value: T) -> Result<usize> {
        Ok(mark(data))
    }

    fn remove_if<T: Element, P: Predicate<T>>(&self, data: &mut [T], _pred: P) -> Result<usize> {
        Ok(mark(data))
    }

    fn remove_if_stencil<T: Element, S: Element, P: Predicate<S>>(
        &self,
        data: &mut [T],
        _stencil: &[S],
        _pred: P,
    ) -> Result<usize> {
        Ok(mark(data))
    }

    fn remove_copy<T: Element, O: Output<T> + ?Sized>(
        &self,
        _input: &[T],
        output: &mut O,
        _value: T,
    ) -> Result<usize> {
        Ok(mark_output(output))
    }

    fn remove_copy_if<T: Element, O: Output<T> + ?Sized, P: Predicate<T>>(
        &self,
        _input: &[T],
        output: &mut O,
        _pred: P,
    ) -> Result<usize> {
        Ok(mark_output(output))
    }

    fn remove_copy_if_stencil<T: Element, S: Element, O: Output<T> + ?Sized, P: Predicate<S>>(
        &self,
        _input: &[T],
        _stencil: &[S],
        output: &mut O,
        _pred: P,
    ) -> Result<usize> {
        Ok(mark_output(output))
    }
}

fn host_buffer(values: &[i32]) -> Buffer<i32, HostRuntime> {
    Buffer::from_slice(values, &HostDevice::new())
}

#[test]
fn test_count_dispatch_implicit() {
    let vec = host_buffer(&[0]);

    assert_eq!(algorithm::count(&retag::<MyTag, _>(&vec), 13).unwrap(), 13);
    assert_eq!(algorithm::count_if(&retag::<MyTag, _>(&vec), IsTrue).unwrap(), 13);

    // The same data under its own tag runs the host implementation.
    assert_eq!(algorithm::count(&vec, 13).unwrap(), 0);
}

#[test]
fn test_retained_len_rejects_count_above_length() {
    // MyTag reports 13 matches for any input
    let vec = host_buffer(&[0]);
    let err = algorithm::retained_len(&retag::<MyTag, _>(&vec), 0).unwrap_err();
    match err {
        Error::Backend(message) => assert!(message.contains("my-tag"), "{message}"),
        other => panic!("expected a backend error, got {other:?}"),
    }

    assert_eq!(algorithm::retained_len(&vec, 0).unwrap(), 0);
}

#[test]
fn test_remove_dispatch_implicit() {
    let mut vec = host_buffer(&[0]);
    algorithm::remove(&mut retag_mut::<MyTag, _>(&mut vec), 0).unwrap();
    assert_eq!(vec[0], 13);

    let mut vec = host_buffer(&[0]);
    algorithm::remove_if(&mut retag_mut::<MyTag, _>(&mut vec), IsTrue).unwrap();
    assert_eq!(vec[0], 13);

    let mut vec = host_buffer(&[0]);
    let stencil = host_buffer(&[0]);
    algorithm::remove_if_stencil(
        &mut retag_mut::<MyTag, _>(&mut vec),
        &retag::<MyTag, _>(&stencil),
        IsTrue,
    )
    .unwrap();
    assert_eq!(vec[0], 13);
}

#[test]
fn test_remove_copy_dispatch_implicit() {
    let vec = host_buffer(&[0]);
    let stencil = host_buffer(&[0]);

    let mut result = host_buffer(&[0]);
    algorithm::remove_copy(&retag::<MyTag, _>(&vec), &mut result, 0).unwrap();
    assert_eq!(result[0], 13);

    let mut result = host_buffer(&[0]);
    algorithm::remove_copy_if(&retag::<MyTag, _>(&vec), &mut result, IsTrue).unwrap();
    assert_eq!(result[0], 13);

    let mut result = host_buffer(&[0]);
    algorithm::remove_copy_if_stencil(
        &retag::<MyTag, _>(&vec),
        &retag::<MyTag, _>(&stencil),
        &mut result,
        IsTrue,
    )
    .unwrap();
    assert_eq!(result[0], 13);

    let mut sink = Discard::new();
    let end = algorithm::remove_copy(&retag::<MyTag, _>(&vec), &mut sink, 0).unwrap();
    assert_eq!(end, 13);
    assert_eq!(sink.position(), 13);
}

#[cfg(feature = "cpu")]
#[test]
fn test_retag_between_bundled_systems() {
    use sift::runtime::cpu::CpuRuntime;

    let mut vec = host_buffer(&[1, 2, 1, 3, 2]);
    let end = algorithm::remove(&mut retag_mut::<CpuRuntime, _>(&mut vec), 2).unwrap();
    assert_eq!(end, 3);
    assert_eq!(&vec.as_slice()[..end], &[1, 1, 3]);
    assert_eq!(algorithm::count(&retag::<CpuRuntime, _>(&vec), 1).unwrap(), 2);
}
