// modules tree
pub mod docs;
pub mod domain {
    pub mod medical {
        pub mod gender;
        pub mod seizure_frequency;
    }
}
pub mod dto {
    pub mod requests {
        pub mod medical {
            pub mod medical_form_request;
        }
    }
}
pub mod errors {
    pub mod code_error;
}
pub mod init {
    pub mod app_init;
    pub mod config;
}
pub mod util {
    pub mod crypto {
        pub mod random_pw;
    }
}

pub use errors::code_error::{CodeErrorResp, CoreResult};
pub use util::crypto::random_pw::generate_secure_password;
