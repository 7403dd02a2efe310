//! Named field access for short vectors.
//!
//! `Vector<T, N>` derefs to one of the `#[repr(C)]` structs below, which has the same layout as
//! `[T; N]`. The zero-sized `_priv` field keeps them from being constructed outside this crate.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! views {
    ($($n:literal => $name:ident { $($field:ident),+ }),+ $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name<T> {
                $( pub $field: T, )+
                _priv: (),
            }

            impl<T> Deref for Vector<T, $n> {
                type Target = $name<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }

            impl<T> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute(self) }
                }
            }
        )+
    };
}

views! {
    2 => XY { x, y },
    3 => XYZ { x, y, z },
    4 => XYZW { x, y, z, w },
}
