use nom::error::{Error as NomError, ErrorKind};
use nom::{bytes::complete::take, number::complete::be_u16, number::complete::be_u8, IResult};

use crate::{Error, ProtocolId};

/// Extension type code for application_layer_protocol_negotiation.
pub const EXTENSION_TYPE_ALPN: u16 = 0x0010;

const MAX_LIST_LEN: usize = u16::MAX as usize;

/// ALPN extension body as defined in RFC 7301 section 3.1.
///
/// ```text
/// opaque ProtocolName<1..2^8-1>;
/// struct {
///     ProtocolName protocol_name_list<2..2^16-1>
/// } ProtocolNameList;
/// ```
///
/// In a ClientHello the list carries the offered protocols in preference
/// order. In a ServerHello it carries exactly one, the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlpnExtension {
    protocols: Vec<ProtocolId>,
}

impl AlpnExtension {
    pub fn new(protocols: Vec<ProtocolId>) -> Result<Self, Error> {
        let len = list_len(&protocols);
        if len > MAX_LIST_LEN {
            return Err(Error::ExtensionTooLarge(len));
        }
        Ok(AlpnExtension { protocols })
    }

    /// The one-element list a server answers with.
    pub fn selected(protocol: ProtocolId) -> Self {
        AlpnExtension {
            protocols: vec![protocol],
        }
    }

    pub fn protocols(&self) -> &[ProtocolId] {
        &self.protocols
    }

    pub fn parse(input: &[u8]) -> IResult<&[u8], AlpnExtension> {
        let (input, list_length) = be_u16(input)?;
        let (input, list_data) = take(list_length)(input)?;

        let mut protocols = Vec::new();
        let mut rest = list_data;

        while !rest.is_empty() {
            let (r, name_length) = be_u8(rest)?;
            if name_length == 0 {
                // Empty protocol names are not permitted.
                return Err(nom::Err::Failure(NomError::new(rest, ErrorKind::Verify)));
            }
            let (r, name) = take(name_length)(r)?;
            // Length is 1..=255 by construction.
            let protocol = ProtocolId::new(name)
                .map_err(|_| nom::Err::Failure(NomError::new(rest, ErrorKind::Verify)))?;
            protocols.push(protocol);
            rest = r;
        }

        Ok((input, AlpnExtension { protocols }))
    }

    /// Parse a complete extension body, rejecting trailing bytes.
    pub fn decode(input: &[u8]) -> Result<AlpnExtension, Error> {
        match AlpnExtension::parse(input) {
            Ok(([], ext)) => Ok(ext),
            Ok((rest, _)) => Err(Error::Malformed(format!(
                "{} trailing bytes after protocol list",
                rest.len()
            ))),
            Err(e) => Err(Error::Malformed(e.to_string())),
        }
    }

    pub fn serialize(&self, output: &mut Vec<u8>) {
        output.extend_from_slice(&(list_len(&self.protocols) as u16).to_be_bytes());

        for protocol in &self.protocols {
            output.push(protocol.len() as u8);
            output.extend_from_slice(protocol.as_bytes());
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + list_len(&self.protocols));
        self.serialize(&mut out);
        out
    }
}

fn list_len(protocols: &[ProtocolId]) -> usize {
    protocols.iter().map(|p| 1 + p.len()).sum()
}
