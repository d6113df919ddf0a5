use anchor_lang::prelude::*;

pub type FluidResult<T = ()> = std::result::Result<T, ErrorCodes>;

#[error_code]
pub enum ErrorCodes {
    #[msg(LIBRARY_MATH_ERROR)]
    LibraryMathError,

    #[msg(LIBRARY_CASTING_ERROR)]
    LibraryCastingFailure,

    #[msg(LIBRARY_UNSUPPORTED_TOKEN_EXTENSION)]
    LibraryUnsupportedTokenExtension,

    #[msg(LIBRARY_INVALID_TOKEN_MINT)]
    LibraryInvalidTokenMint,

    #[msg(LIBRARY_CPI_FAILED)]
    LibraryCpiFailed,

    #[msg(LIBRARY_INVALID_RETURN_DATA)]
    LibraryInvalidReturnData,

    #[msg(LIBRARY_INVALID_INSTRUCTION_DATA)]
    LibraryInvalidInstructionData,
}
