use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Quat;

/// Field view of a [`Quat`], laid out like its `[w, x, y, z]` storage.
#[repr(C)]
pub struct WXYZ<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

impl<T> Deref for Quat<T> {
    type Target = WXYZ<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        unsafe { mem::transmute(self) }
    }
}

impl<T> DerefMut for Quat<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { mem::transmute(self) }
    }
}
