use stegframe_cipher::{decrypt_data, encrypt_data, ENCRYPTION_OVERHEAD};

use crate::frame::{encoded_len, ContainerFrame};
use crate::result::Result;
use crate::StegError;

/// What gets hidden: a text message or a named file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Secret {
    Text(String),
    File { name: String, data: Vec<u8> },
}

impl Secret {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Secret::Text(text.into())
    }

    pub fn file<S: Into<String>>(name: S, data: Vec<u8>) -> Self {
        Secret::File {
            name: name.into(),
            data,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Secret::Text(_))
    }

    /// the file name inside the frame, empty for text
    pub fn file_name(&self) -> &str {
        match self {
            Secret::Text(_) => "",
            Secret::File { name, .. } => name,
        }
    }

    pub fn data(&self) -> &[u8] {
        match self {
            Secret::Text(text) => text.as_bytes(),
            Secret::File { data, .. } => data,
        }
    }

    /// size of the frame this secret becomes, known before any key derivation
    pub fn framed_len(&self, encrypted: bool) -> usize {
        let overhead = if encrypted { ENCRYPTION_OVERHEAD } else { 0 };
        encoded_len(self.file_name().len(), self.data().len() + overhead)
    }

    /// encrypts the data when a password is given and wraps it into a frame
    pub fn into_frame(self, password: Option<&str>) -> Result<ContainerFrame> {
        let (is_text, file_name, data) = match self {
            Secret::Text(text) => (true, String::new(), text.into_bytes()),
            Secret::File { name, data } => (false, name, data),
        };

        Ok(match password {
            Some(password) => {
                ContainerFrame::new(encrypt_data(password, &data)?, is_text, file_name, true)
            }
            None => ContainerFrame::new(data, is_text, file_name, false),
        })
    }

    /// restores the secret of a frame, decrypting it if needed
    pub fn from_frame(frame: ContainerFrame, password: Option<&str>) -> Result<Self> {
        let is_text = frame.is_text();
        let file_name = frame.file_name().to_owned();
        let data = if frame.is_encrypted() {
            let password = password.ok_or(StegError::PasswordRequired)?;
            decrypt_data(password, frame.payload())?
        } else {
            frame.into_payload()
        };

        Ok(if is_text {
            Secret::Text(String::from_utf8(data)?)
        } else {
            Secret::File {
                name: file_name,
                data,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use stegframe_cipher::CipherError;

    use super::*;

    #[test]
    fn should_frame_plain_text_without_file_name() {
        let frame = Secret::text("hello").into_frame(None).unwrap();

        assert!(frame.is_text());
        assert!(!frame.is_encrypted());
        assert_eq!(frame.file_name(), "");
        assert_eq!(frame.payload(), b"hello");
        assert_eq!(Secret::text("hello").framed_len(false), frame.encoded_len());
    }

    #[test]
    fn should_encrypt_with_a_password() {
        let secret = Secret::text("secret");
        let expected_len = secret.framed_len(true);
        let frame = secret.into_frame(Some("pw123")).unwrap();

        assert!(frame.is_encrypted());
        assert_eq!(frame.payload().len(), 16 + 12 + 6 + 16);
        assert_eq!(frame.encoded_len(), expected_len);
    }

    #[test]
    fn should_require_the_right_password() {
        let frame = Secret::text("secret").into_frame(Some("pw123")).unwrap();

        assert!(matches!(
            Secret::from_frame(frame.clone(), None),
            Err(StegError::PasswordRequired)
        ));
        assert!(matches!(
            Secret::from_frame(frame.clone(), Some("wrong")),
            Err(StegError::Crypto(CipherError::AuthenticationFailed))
        ));
        assert_eq!(
            Secret::from_frame(frame, Some("pw123")).unwrap(),
            Secret::text("secret")
        );
    }

    #[test]
    fn should_restore_files_with_their_name() {
        let secret = Secret::file("notes.md", b"# notes".to_vec());
        let frame = secret.clone().into_frame(None).unwrap();

        assert_eq!(Secret::from_frame(frame, None).unwrap(), secret);
    }

    #[test]
    fn should_ignore_a_password_for_plain_frames() {
        let frame = Secret::text("plain").into_frame(None).unwrap();

        assert_eq!(
            Secret::from_frame(frame, Some("unused")).unwrap(),
            Secret::text("plain")
        );
    }

    #[test]
    fn should_reject_text_that_is_no_utf8() {
        let frame = ContainerFrame::text(vec![0xc3, 0x28], false);

        assert!(matches!(
            Secret::from_frame(frame, None),
            Err(StegError::InvalidTextData(_))
        ));
    }
}
