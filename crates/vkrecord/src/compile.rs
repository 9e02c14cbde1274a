//! Dispatch from command values to their encoders.
//!
//! Every command type implements [`Encode`]. A [`CommandList`] is anything that
//! can be compiled in order: tuples of command values (each element encoded by
//! its own type's encoder, resolved at compile time), vectors and arrays of a
//! single command type, and `Vec<Command>` for lists assembled at runtime.

use crate::error::RecordError;
use crate::session::RecordingSession;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A command value that knows how to record itself.
///
/// Encoding issues the command's native call(s) and moves the resources it
/// references into the session's ledger. The vocabulary is closed: this trait
/// cannot be implemented outside this crate.
pub trait Encode: sealed::Sealed {
    fn encode(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError>;
}

/// An ordered sequence of commands. A single command value is a list of one.
pub trait CommandList {
    fn compile_into(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError>;
}

impl CommandList for () {
    fn compile_into(self, _session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        Ok(())
    }
}

impl<C: Encode> CommandList for Vec<C> {
    fn compile_into(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        for command in self {
            command.encode(session)?;
        }
        Ok(())
    }
}

impl<C: Encode, const N: usize> CommandList for [C; N] {
    fn compile_into(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
        for command in self {
            command.encode(session)?;
        }
        Ok(())
    }
}

macro_rules! tuple_command_list {
    ($($name:ident),+) => {
        impl<$($name: Encode),+> CommandList for ($($name,)+) {
            #[allow(non_snake_case)]
            fn compile_into(self, session: &mut RecordingSession<'_>) -> Result<(), RecordError> {
                let ($($name,)+) = self;
                $($name.encode(session)?;)+
                Ok(())
            }
        }
    };
}

tuple_command_list!(A);
tuple_command_list!(A, B);
tuple_command_list!(A, B, C);
tuple_command_list!(A, B, C, D);
tuple_command_list!(A, B, C, D, E);
tuple_command_list!(A, B, C, D, E, F);
tuple_command_list!(A, B, C, D, E, F, G);
tuple_command_list!(A, B, C, D, E, F, G, H);
tuple_command_list!(A, B, C, D, E, F, G, H, I);
tuple_command_list!(A, B, C, D, E, F, G, H, I, J);
tuple_command_list!(A, B, C, D, E, F, G, H, I, J, K);
tuple_command_list!(A, B, C, D, E, F, G, H, I, J, K, L);
tuple_command_list!(A, B, C, D, E, F, G, H, I, J, K, L, M);
tuple_command_list!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
tuple_command_list!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
tuple_command_list!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);
