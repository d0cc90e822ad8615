//! Definitions of the Solidity constructors called during deployment

use alloy_primitives::{Address, Bytes};
use alloy_sol_types::{sol, SolConstructor};

use crate::{errors::ScriptError, types::DaoContract};

sol! {
    contract Governance {
        constructor(address sdao);
    }

    contract Voting {
        constructor(address sdao, address governance);
    }

    contract Treasury {
        constructor(address governance, address sdao, address router);
    }
}

/// ABI-encode the constructor arguments of the given contract
pub fn encode_constructor_args(
    contract: DaoContract,
    args: &[Address],
) -> Result<Vec<u8>, ScriptError> {
    let encoded = match (contract, args) {
        (DaoContract::Sdao, []) => Vec::new(),
        (DaoContract::Governance, [sdao]) => Governance::constructorCall { sdao: *sdao }.abi_encode(),
        (DaoContract::Voting, [sdao, governance]) => Voting::constructorCall {
            sdao: *sdao,
            governance: *governance,
        }
        .abi_encode(),
        (DaoContract::Treasury, [governance, sdao, router]) => Treasury::constructorCall {
            governance: *governance,
            sdao: *sdao,
            router: *router,
        }
        .abi_encode(),
        _ => {
            return Err(ScriptError::CalldataConstruction(format!(
                "{} does not take {} constructor argument(s)",
                contract,
                args.len()
            )))
        }
    };

    Ok(encoded)
}

/// Build the init code for a contract creation transaction,
/// i.e. the creation bytecode followed by the encoded constructor arguments
pub fn init_code(
    contract: DaoContract,
    bytecode: &Bytes,
    args: &[Address],
) -> Result<Bytes, ScriptError> {
    let encoded_args = encode_constructor_args(contract, args)?;
    Ok([&bytecode[..], encoded_args.as_slice()].concat().into())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, bytes};

    use super::*;

    const SDAO: Address = address!("1111111111111111111111111111111111111111");
    const GOVERNANCE: Address = address!("2222222222222222222222222222222222222222");

    #[test]
    fn sdao_takes_no_arguments() {
        assert!(encode_constructor_args(DaoContract::Sdao, &[]).unwrap().is_empty());
    }

    #[test]
    fn addresses_are_left_padded_words() {
        let encoded = encode_constructor_args(DaoContract::Voting, &[SDAO, GOVERNANCE]).unwrap();

        assert_eq!(encoded.len(), 64);
        assert_eq!(&encoded[..12], &[0u8; 12]);
        assert_eq!(&encoded[12..32], SDAO.as_slice());
        assert_eq!(&encoded[44..64], GOVERNANCE.as_slice());
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = encode_constructor_args(DaoContract::Governance, &[SDAO, GOVERNANCE]).unwrap_err();
        assert!(matches!(err, ScriptError::CalldataConstruction(_)));
    }

    #[test]
    fn init_code_appends_arguments_to_bytecode() {
        let bytecode = bytes!("6080604052");
        let code = init_code(DaoContract::Governance, &bytecode, &[SDAO]).unwrap();

        assert_eq!(code.len(), bytecode.len() + 32);
        assert!(code.starts_with(&bytecode));
        assert!(code.ends_with(SDAO.as_slice()));
    }
}
