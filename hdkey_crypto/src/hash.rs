use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

pub fn sha256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(input);
    hasher.finalize().into()
}

/// Double SHA-256, the Base58Check checksum hash.
pub fn sha256d(input: &[u8]) -> [u8; 32] {
    let first = sha256(input);
    sha256(&first)
}

pub fn ripemd160(input: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(input);
    hasher.finalize().into()
}

/// RIPEMD-160 of SHA-256. Key identifiers and fingerprints are built on it.
pub fn hash160(input: &[u8]) -> [u8; 20] {
    ripemd160(&sha256(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    // Compressed public keys from BIP32 test vectors 1 and 2.
    const V1_MASTER_PUB: [u8; 33] =
        hex!("0339a36013301597daef41fbe593a02cc513d0b55527ec2df1050e2e8ff49c85c2");
    const V1_M0H_PUB: [u8; 33] =
        hex!("035a784662a4a20a65bf6aab9ae98a6c068a81c52e4b032c0fb5400c706cfccc56");
    const V2_MASTER_PUB: [u8; 33] =
        hex!("03cbcaa9c98c877a26977d00825c956a238e8dddfbd322cce4f74b0b5bd6ace4a7");

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256(b""),
            hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
        );
    }

    #[test]
    fn sha256_of_public_key() {
        assert_eq!(
            sha256(&V1_MASTER_PUB),
            hex!("b766246eacc76f47810bbbdcfcdc0b4e54c5983de526c2b660c65a588468e0ab")
        );
    }

    #[test]
    fn sha256d_checksums_serialized_master() {
        // xprv of BIP32 vector 1, before Base58Check.
        let serialized = hex!(
            "0488ade4" "00" "00000000" "00000000"
            "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508"
            "00e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"
        );
        assert_eq!(
            sha256d(&serialized),
            hex!("e77e9d710317ecac156a62caffcacb931679294f8b2b56f8a5d170b3eb55747c")
        );
        assert_eq!(sha256d(&serialized), sha256(&sha256(&serialized)));
    }

    #[test]
    fn ripemd160_of_empty_input() {
        assert_eq!(
            ripemd160(b""),
            hex!("9c1185a5c5e9fc54612808977ee8f548b2258d31")
        );
    }

    #[test]
    fn identifiers() {
        for (pubkey, id) in [
            (V1_MASTER_PUB, hex!("3442193e1bb70916e914552172cd4e2dbc9df811")),
            (V1_M0H_PUB, hex!("5c1bd648ed23aa5fd50ba52b2457c11e9e80a6a7")),
            (V2_MASTER_PUB, hex!("bd16bee53961a47d6ad888e29545434a89bdfe95")),
        ] {
            assert_eq!(hash160(&pubkey), id);
            assert_eq!(ripemd160(&sha256(&pubkey)), id);
        }
    }
}
