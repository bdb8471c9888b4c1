//! The deposit transaction type.

use alloc::vec::Vec;
use alloy_eips::eip2718::{Decodable2718, Eip2718Error, Eip2718Result, Encodable2718};
use alloy_primitives::{keccak256, Address, Bytes, TxKind, B256, U256};
use alloy_rlp::{length_of_length, BufMut, Decodable, Encodable, Error as DecodeError, Header};

/// The EIP-2718 type byte of deposit transactions.
pub const DEPOSIT_TX_TYPE: u8 = 0x7E;

/// Deposit transactions, also known as deposits are initiated on L1, and executed on L2.
///
/// Network upgrade transactions are deposits as well: they have no signature and are identified
/// by their [source hash](crate::UpgradeDepositSource).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TxDeposit {
    /// Hash that uniquely identifies the source of the deposit.
    pub source_hash: B256,
    /// The address of the sender account.
    pub from: Address,
    /// The address of the recipient account, or the null (zero-length) address if the deposited
    /// transaction is a contract creation.
    pub to: TxKind,
    /// The ETH value to mint on L2. Zero encodes as the empty string.
    pub mint: u128,
    /// The ETH value to send to the recipient account.
    pub value: U256,
    /// The gas limit for the L2 transaction.
    pub gas_limit: u64,
    /// Field indicating if this transaction is exempt from the L2 gas limit.
    pub is_system_transaction: bool,
    /// The init code of a contract creation, or the calldata of a call.
    pub input: Bytes,
}

impl TxDeposit {
    /// Returns `true` if the deposit creates a contract.
    pub const fn is_create(&self) -> bool {
        matches!(self.to, TxKind::Create)
    }

    /// Returns the transaction hash, `keccak256` of the EIP-2718 envelope.
    pub fn tx_hash(&self) -> B256 {
        keccak256(self.encoded_2718())
    }

    /// Decodes the inner [TxDeposit] fields from RLP bytes.
    ///
    /// NOTE: This assumes a RLP header has already been decoded, and _just_ decodes the following
    /// RLP fields in the following order:
    ///
    /// - `source_hash`
    /// - `from`
    /// - `to`
    /// - `mint`
    /// - `value`
    /// - `gas_limit`
    /// - `is_system_transaction`
    /// - `input`
    pub fn decode_fields(buf: &mut &[u8]) -> Result<Self, DecodeError> {
        Ok(Self {
            source_hash: Decodable::decode(buf)?,
            from: Decodable::decode(buf)?,
            to: Decodable::decode(buf)?,
            mint: Decodable::decode(buf)?,
            value: Decodable::decode(buf)?,
            gas_limit: Decodable::decode(buf)?,
            is_system_transaction: Decodable::decode(buf)?,
            input: Decodable::decode(buf)?,
        })
    }

    /// Outputs the length of the transaction's fields, without a RLP header.
    fn fields_len(&self) -> usize {
        self.source_hash.length()
            + self.from.length()
            + self.to.length()
            + self.mint.length()
            + self.value.length()
            + self.gas_limit.length()
            + self.is_system_transaction.length()
            + self.input.length()
    }

    /// Encodes only the transaction's fields into the desired buffer, without a RLP header.
    fn encode_fields(&self, out: &mut dyn BufMut) {
        self.source_hash.encode(out);
        self.from.encode(out);
        self.to.encode(out);
        self.mint.encode(out);
        self.value.encode(out);
        self.gas_limit.encode(out);
        self.is_system_transaction.encode(out);
        self.input.encode(out);
    }
}

impl Encodable for TxDeposit {
    fn encode(&self, out: &mut dyn BufMut) {
        Header { list: true, payload_length: self.fields_len() }.encode(out);
        self.encode_fields(out);
    }

    fn length(&self) -> usize {
        let payload_length = self.fields_len();
        length_of_length(payload_length) + payload_length
    }
}

impl Decodable for TxDeposit {
    fn decode(data: &mut &[u8]) -> alloy_rlp::Result<Self> {
        let header = Header::decode(data)?;
        if !header.list {
            return Err(DecodeError::UnexpectedString);
        }
        let remaining_len = data.len();
        if header.payload_length > remaining_len {
            return Err(DecodeError::InputTooShort);
        }

        let tx = Self::decode_fields(data)?;
        let consumed = remaining_len - data.len();
        if consumed != header.payload_length {
            return Err(DecodeError::ListLengthMismatch {
                expected: header.payload_length,
                got: consumed,
            });
        }
        Ok(tx)
    }
}

impl Encodable2718 for TxDeposit {
    fn type_flag(&self) -> Option<u8> {
        Some(DEPOSIT_TX_TYPE)
    }

    fn encode_2718_len(&self) -> usize {
        1 + self.length()
    }

    fn encode_2718(&self, out: &mut dyn BufMut) {
        out.put_u8(DEPOSIT_TX_TYPE);
        self.encode(out);
    }
}

impl Decodable2718 for TxDeposit {
    fn typed_decode(ty: u8, buf: &mut &[u8]) -> Eip2718Result<Self> {
        if ty != DEPOSIT_TX_TYPE {
            return Err(Eip2718Error::UnexpectedType(ty));
        }
        Ok(Decodable::decode(buf)?)
    }

    fn fallback_decode(_: &mut &[u8]) -> Eip2718Result<Self> {
        Err(DecodeError::Custom("deposit transactions are always typed").into())
    }
}

/// Encodes a list of deposits into their EIP-2718 envelopes.
pub fn encode_deposits<'a>(deposits: impl IntoIterator<Item = &'a TxDeposit>) -> Vec<Bytes> {
    deposits.into_iter().map(|tx| Bytes::from(tx.encoded_2718())).collect()
}
