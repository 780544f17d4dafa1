
extern crate bech32m_codec;

use bech32m_codec::{address, bech32m};

fn do_test(data: &[u8]) {
    let s = match std::str::from_utf8(data) {
        Ok(s) => s,
        Err(_) => return,
    };

    if let Ok(value) = bech32m::decode(s) {
        let reser = bech32m::encode(&value).expect("decoded values re-encode");
        assert_eq!(reser, s.to_ascii_lowercase());
    }

    if let Ok(addr) = address::decode(s) {
        let len = addr.program().as_bytes().len();
        assert!(len >= 2 && len <= 40);
        let reser = address::encode(addr.hrp(), addr.program().as_bytes()).expect("decoded addresses re-encode");
        assert_eq!(address::decode(&reser), Ok(addr));
    }
}

#[cfg(feature = "afl")]
extern crate afl;
#[cfg(feature = "afl")]
fn main() {
    afl::read_stdio_bytes(|data| {
        do_test(&data);
    });
}

#[cfg(feature = "honggfuzz")]
#[macro_use] extern crate honggfuzz;
#[cfg(feature = "honggfuzz")]
fn main() {
    loop {
        fuzz!(|data| {
            do_test(data);
        });
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn upper_case_input() {
        super::do_test(b"A1LQFN3A");
        super::do_test(b"BC1P0XLXVLHEMJA6C4DQV22UAPCTQUPFHLXM9H8Z3K2E72Q4K9HCZ7VQZK5JJ0");
    }

    #[test]
    fn non_utf8_input() {
        super::do_test(&[0xff, 0x31, 0x71]);
    }
}
