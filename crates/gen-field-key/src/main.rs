use aes_gcm_siv::{
    aead::{KeyInit, OsRng},
    Aes256GcmSiv,
};
use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};

fn main() {
    let key = Aes256GcmSiv::generate_key(&mut OsRng);
    let encoded_key = STANDARD_NO_PAD.encode(key.as_slice());
    println!("Field-codec master key, AES-256 GCM SIV (base-64 encoded): {encoded_key}");
}
