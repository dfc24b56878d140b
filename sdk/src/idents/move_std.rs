use crate::{idents::ModuleAndNameIdent, sui};

// == `std::string` ==

pub struct Utf8;

const STRING_MODULE: &sui::MoveIdentStr = sui::move_ident_str!("string");

impl Utf8 {
    /// `std::string::utf8`
    pub const UTF8: ModuleAndNameIdent = ModuleAndNameIdent {
        module: STRING_MODULE,
        name: sui::move_ident_str!("utf8"),
    };

    /// Convert a string to a Move UTF-8 string.
    pub fn utf8_string_from_str<T: AsRef<str>>(
        tx: &mut sui::ProgrammableTransactionBuilder,
        str: T,
    ) -> anyhow::Result<sui::Argument> {
        let str = tx.pure(str.as_ref().as_bytes())?;

        Ok(tx.programmable_move_call(
            sui::MOVE_STDLIB_PACKAGE_ID,
            Self::UTF8.module.into(),
            Self::UTF8.name.into(),
            vec![],
            vec![str],
        ))
    }
}
