#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

//======================================================================
// src/lib.rs
// Crate entry point: the keyed AEAD type, trait wiring and the
// per-variant aliases.
//======================================================================

mod duplex;
mod variant;


use core::marker::PhantomData;

use aead::consts::U0;
use aead::generic_array::GenericArray;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use aead::{self, AeadCore, AeadInPlace, Error, Key, KeyInit, KeySizeUser, Nonce, Tag};
pub use variant::{
    Schwaemm128_128, Schwaemm192_192, Schwaemm256_128, Schwaemm256_256, SchwaemmVariant,
};

/// Schwaemm AEAD keyed with a fixed secret key.
///
/// The permutation state lives only for the duration of a call; the struct
/// holds nothing but the key, which is wiped on drop.
#[derive(Clone)]
pub struct Schwaemm<V: SchwaemmVariant> {
    key: GenericArray<u8, V::KeySize>,
    _variant: PhantomData<V>,
}

impl<V: SchwaemmVariant> KeySizeUser for Schwaemm<V> {
    type KeySize = V::KeySize;
}

impl<V: SchwaemmVariant> KeyInit for Schwaemm<V> {
    fn new(key: &Key<Self>) -> Self {
        Self {
            key: key.clone(),
            _variant: PhantomData,
        }
    }
}

impl<V: SchwaemmVariant> AeadCore for Schwaemm<V> {
    type NonceSize = V::NonceSize;
    type TagSize = V::TagSize;
    type CiphertextOverhead = U0;
}

impl<V: SchwaemmVariant> AeadInPlace for Schwaemm<V> {
    fn encrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        let mut tag = Tag::<Self>::default();
        duplex::encrypt_in_place::<V>(
            self.key.as_slice(),
            nonce.as_slice(),
            associated_data,
            buffer,
            tag.as_mut_slice(),
        );
        Ok(tag)
    }

    fn decrypt_in_place_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        buffer: &mut [u8],
        tag: &Tag<Self>,
    ) -> aead::Result<()> {
        duplex::decrypt_in_place::<V>(
            self.key.as_slice(),
            nonce.as_slice(),
            associated_data,
            buffer,
            tag.as_slice(),
        )
    }
}

impl<V: SchwaemmVariant> Schwaemm<V> {
    /// One-shot encryption with separate plaintext and ciphertext buffers.
    ///
    /// The buffers must have equal length; the tag is returned detached.
    pub fn encrypt_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        plaintext: &[u8],
        ciphertext: &mut [u8],
    ) -> aead::Result<Tag<Self>> {
        if ciphertext.len() != plaintext.len() {
            return Err(Error);
        }
        ciphertext.copy_from_slice(plaintext);
        self.encrypt_in_place_detached(nonce, associated_data, ciphertext)
    }

    /// One-shot verified decryption with separate ciphertext and plaintext
    /// buffers.
    ///
    /// The buffers must have equal length. On authentication failure the
    /// plaintext buffer is zeroized and an error returned; its contents
    /// must not be used unless this returns `Ok`.
    pub fn decrypt_detached(
        &self,
        nonce: &Nonce<Self>,
        associated_data: &[u8],
        ciphertext: &[u8],
        tag: &Tag<Self>,
        plaintext: &mut [u8],
    ) -> aead::Result<()> {
        if plaintext.len() != ciphertext.len() {
            return Err(Error);
        }
        plaintext.copy_from_slice(ciphertext);
        self.decrypt_in_place_detached(nonce, associated_data, plaintext, tag)
    }
}

impl<V: SchwaemmVariant> Drop for Schwaemm<V> {
    fn drop(&mut self) {
        self.key.as_mut_slice().zeroize();
    }
}

impl<V: SchwaemmVariant> ZeroizeOnDrop for Schwaemm<V> {}

/// Schwaemm128-128 with its parameters bound.
pub type Schwaemm128_128Aead = Schwaemm<Schwaemm128_128>;
/// Schwaemm192-192 with its parameters bound.
pub type Schwaemm192_192Aead = Schwaemm<Schwaemm192_192>;
/// Schwaemm256-128 with its parameters bound.
pub type Schwaemm256_128Aead = Schwaemm<Schwaemm256_128>;
/// Schwaemm256-256 with its parameters bound.
pub type Schwaemm256_256Aead = Schwaemm<Schwaemm256_256>;
