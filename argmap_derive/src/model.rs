#[derive(Debug, PartialEq, Eq)]
pub struct DeriveVariant {
    pub ident: syn::Ident,
    pub name: String,
    pub ordinal: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveEnum {
    pub enum_name: syn::Ident,
    pub variants: Vec<DeriveVariant>,
}
