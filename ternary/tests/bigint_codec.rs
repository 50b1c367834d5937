// Copyright 2020-2021 IOTA Stiftung
// SPDX-License-Identifier: Apache-2.0

use ternary::{bytes_to_trits, trits_to_bytes, trytes_to_trits, Error};

const VEC_1: &str = "EMIDYNHBWMBCXVDEFOFWINXTERALUKYYPPHKP9JJFGJEIUY9MUDVNFZHMMWZUYUSWAIOWEVTHNWMHANBH";
const VEC_1_BYTES: [u8; 48] = [
    236, 51, 87, 194, 177, 242, 107, 101, 103, 168, 5, 66, 166, 81, 89, 243, 253, 197, 196, 167, 255, 13, 7, 255, 82,
    193, 78, 211, 157, 243, 205, 238, 142, 59, 98, 37, 11, 4, 89, 43, 160, 190, 239, 144, 158, 28, 67, 19,
];

const VEC_2: &str = "DJ9WGAKRZOMH9KVRCHGCDCREXZVDKY9FXAXVSLELYADXHQCQQSMQYAEEBTEIWTQDUZIOFSFLBQQA9RUPX";
const VEC_2_BYTES: [u8; 48] = [
    184, 83, 213, 85, 177, 195, 33, 31, 86, 245, 168, 205, 110, 156, 207, 177, 122, 174, 237, 75, 210, 56, 85, 12,
    191, 10, 209, 77, 84, 232, 148, 185, 210, 97, 59, 96, 214, 31, 247, 230, 30, 67, 122, 93, 101, 171, 72, 105,
];

const VEC_3: &str = "9RFAOVEWQDNGBPEGFZTVJKKITBASFWCQBSTZYWTYIJETVZJYNFFIEQ9JMQWEHQ9ZKARYTE9GGDYZHIPJX";
const VEC_3_BYTES: [u8; 48] = [
    200, 133, 129, 2, 47, 13, 241, 221, 98, 137, 183, 55, 217, 17, 54, 58, 35, 144, 226, 211, 121, 162, 148, 10, 119,
    202, 21, 32, 48, 36, 98, 155, 2, 253, 57, 40, 89, 220, 88, 211, 119, 78, 246, 21, 121, 44, 224, 15,
];

#[test]
fn encodes_known_vectors() {
    for (trytes, bytes) in [(VEC_1, VEC_1_BYTES), (VEC_2, VEC_2_BYTES), (VEC_3, VEC_3_BYTES)] {
        let trits = trytes_to_trits(trytes).unwrap();
        assert_eq!(trits_to_bytes(&trits).unwrap(), bytes);
    }
}

#[test]
fn decodes_known_vectors() {
    for (trytes, bytes) in [(VEC_1, VEC_1_BYTES), (VEC_2, VEC_2_BYTES), (VEC_3, VEC_3_BYTES)] {
        let mut trits = trytes_to_trits(trytes).unwrap();
        trits[242] = 0;
        assert_eq!(bytes_to_trits(&bytes).unwrap().to_vec(), trits);
    }
}

#[test]
fn rejects_malformed_input_through_the_public_api() {
    assert_eq!(trits_to_bytes(&[0; 10]), Err(Error::InvalidTritsLength(10)));
    assert_eq!(bytes_to_trits(&[0; 49]), Err(Error::InvalidBytesLength(49)));
}
