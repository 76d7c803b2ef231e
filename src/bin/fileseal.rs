// src/bin/fileseal.rs
//! fileseal CLI — encrypt/decrypt files, generate keys, sign and verify

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use fileseal::config::{load as load_config, Config};
use fileseal::{decrypt_file, encrypt_file, generate_keypair, sign, verify};
use rpassword::read_password;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("encrypt") => cmd_encrypt(&args[1..]),
        Some("decrypt") => cmd_decrypt(&args[1..]),
        Some("keygen") => cmd_keygen(&args[1..]),
        Some("sign") => cmd_sign(&args[1..]),
        Some("verify") => cmd_verify(&args[1..]),
        Some(other) => {
            print_usage();
            bail!("unknown action: {other}");
        }
        None => {
            print_usage();
            Ok(())
        }
    }
}

fn cmd_encrypt(args: &[String]) -> Result<()> {
    let cfg = load_config();
    let input = Path::new(
        args.first()
            .context("usage: fileseal encrypt <input> [output]")?,
    );
    let output = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => prefixed_sibling(input, &cfg.naming.encrypted_prefix)?,
    };
    ensure_writable(&output, cfg)?;

    let password = prompt_password()?;
    let size = encrypt_file(input, output.as_path(), &password)
        .with_context(|| format!("failed to encrypt {}", input.display()))?;

    info!(
        "encrypted {} ({size} bytes) → {}",
        input.display(),
        output.display()
    );
    Ok(())
}

fn cmd_decrypt(args: &[String]) -> Result<()> {
    let cfg = load_config();
    let input = Path::new(
        args.first()
            .context("usage: fileseal decrypt <input> [output]")?,
    );
    let output = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None => {
            // encrypted_report.pdf → decrypted_report.pdf
            let name = file_name(input)?;
            let stripped = name
                .strip_prefix(cfg.naming.encrypted_prefix.as_str())
                .unwrap_or(name);
            input.with_file_name(format!("{}{stripped}", cfg.naming.decrypted_prefix))
        }
    };
    ensure_writable(&output, cfg)?;

    let password = prompt_password()?;
    let size = decrypt_file(input, output.as_path(), &password)
        .with_context(|| format!("failed to decrypt {}", input.display()))?;

    info!(
        "decrypted {} → {} ({size} bytes)",
        input.display(),
        output.display()
    );
    Ok(())
}

fn cmd_keygen(args: &[String]) -> Result<()> {
    let cfg = load_config();
    let out_dir = Path::new(args.first().map(String::as_str).unwrap_or("."));
    let private_path = out_dir.join("private.pem");
    let public_path = out_dir.join("public.pem");
    ensure_writable(&private_path, cfg)?;
    ensure_writable(&public_path, cfg)?;

    info!("generating 2048-bit RSA key pair…");
    let pair = generate_keypair()?;

    std::fs::write(&private_path, &pair.private_pem)?;
    std::fs::write(&public_path, &pair.public_pem)?;

    let fingerprint = Sha256::digest(pair.public_pem.as_bytes());
    info!("public key fingerprint: {}", hex::encode(fingerprint));
    info!(
        "wrote {} and {}",
        private_path.display(),
        public_path.display()
    );
    warn!("store the private key somewhere safe — it cannot be recovered");
    Ok(())
}

fn cmd_sign(args: &[String]) -> Result<()> {
    let cfg = load_config();
    let [input, key_path] = args else {
        bail!("usage: fileseal sign <input> <private-pem>");
    };
    let input = Path::new(input);

    let message = std::fs::read(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let private_pem = std::fs::read_to_string(key_path)
        .with_context(|| format!("failed to read {key_path}"))?;

    let signature = sign(&message, &private_pem)?;

    let mut sig_path = input.as_os_str().to_owned();
    sig_path.push(".sig");
    let sig_path = PathBuf::from(sig_path);
    ensure_writable(&sig_path, cfg)?;
    std::fs::write(&sig_path, format!("{signature}\n"))?;

    info!("signed {} → {}", input.display(), sig_path.display());
    Ok(())
}

fn cmd_verify(args: &[String]) -> Result<()> {
    let [input, sig_path, key_path] = args else {
        bail!("usage: fileseal verify <input> <signature-file> <public-pem>");
    };

    let message =
        std::fs::read(input).with_context(|| format!("failed to read {input}"))?;
    let signature = std::fs::read_to_string(sig_path)
        .with_context(|| format!("failed to read {sig_path}"))?;
    let public_pem = std::fs::read_to_string(key_path)
        .with_context(|| format!("failed to read {key_path}"))?;

    if verify(&message, signature.trim_end(), &public_pem) {
        info!("signature VALID — {input} is intact");
        Ok(())
    } else {
        warn!("signature INVALID — {input} was modified or the key does not match");
        std::process::exit(1);
    }
}

fn prompt_password() -> Result<String> {
    print!("Password: ");
    std::io::stdout().flush()?;
    let input = read_password()?;
    Ok(input.trim_end().to_owned())
}

fn prefixed_sibling(input: &Path, prefix: &str) -> Result<PathBuf> {
    let name = file_name(input)?;
    Ok(input.with_file_name(format!("{prefix}{name}")))
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .context("non-UTF8 path")
}

fn ensure_writable(path: &Path, cfg: &Config) -> Result<()> {
    if path.exists() && !cfg.features.overwrite_existing {
        bail!(
            "{} already exists (set features.overwrite_existing to replace it)",
            path.display()
        );
    }
    Ok(())
}

fn print_usage() {
    println!("fileseal — password-based file encryption and digital signatures");
    println!();
    println!("Usage:");
    println!("  fileseal encrypt <input> [output]                   encrypt a file (password prompted)");
    println!("  fileseal decrypt <input> [output]                   decrypt an envelope (password prompted)");
    println!("  fileseal keygen  [out-dir]                          write private.pem / public.pem");
    println!("  fileseal sign    <input> <private-pem>              write <input>.sig");
    println!("  fileseal verify  <input> <signature> <public-pem>   exit 0 if valid, 1 if not");
}
