// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::{fmt, rc::Rc};

use crate::{error::BoxError, value::Value};

type ListenerFn = dyn Fn(&[Value]) -> Result<(), BoxError>;

/// Cloneable handle to a host callback. Equality is handle identity,
/// matching how engine function objects compare. Callbacks that carry
/// state do so through their own interior mutability.
#[derive(Clone)]
pub struct Listener(Rc<ListenerFn>);

impl Listener {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<(), BoxError> + 'static,
    {
        Self(Rc::new(f))
    }

    /// Invoke the callback, propagating its error to the invoker.
    pub fn call(&self, args: &[Value]) -> Result<(), BoxError> {
        (self.0)(args)
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Rc::as_ptr(&self.0))
    }
}
