use crate::ControllerBuilder;
use proc_macro2::TokenStream;
use quote::quote;

pub fn generate(builder: &ControllerBuilder<'_>) -> TokenStream {
    let ctrl = builder.ctrl;
    let request_path = ctrl.request_path();
    let identifier_field = ctrl.identifier_field();
    let kind = ctrl.kind().to_string();

    quote! {
        pub const REQUEST_PATH: &str = #request_path;
        pub const IDENTIFIER_FIELD: &str = #identifier_field;
        pub const ENDPOINT_KIND: &str = #kind;
    }
}
