//! Derive macros for `argmap`.
//! See [documentation root](https://docs.rs/argmap/latest/argmap/index.html) for full details.
extern crate proc_macro;

mod generate;
mod load;
mod model;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

use crate::model::DeriveEnum;

const MACRO_ARG_ENUM: &str = "ArgEnum";
const ATTRIBUTE_ARGMAP: &str = "argmap";

/// Implement `ScalarValue` and `OptionValue` for a unit-only enum, so it may be used as an option type.
///
/// Each variant is matched on the Cli by its name (case-insensitive), or its ordinal.
/// Ordinals follow the explicit discriminants, counting up from the previous variant (starting at `0`).
///
/// Attributes:
/// * `#[argmap(name = "...")]` on a variant changes the name it is matched by.
#[proc_macro_derive(ArgEnum, attributes(argmap))]
pub fn arg_enum(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveEnum::try_from(derive_input).and_then(TokenStream2::try_from) {
        Ok(token_stream) => token_stream.into(),
        Err(error) => error.to_compile_error().into(),
    }
}
