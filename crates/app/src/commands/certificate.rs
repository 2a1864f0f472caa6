use services::AppServices;
use ui::vm::CertificateVm;

use crate::error::CliError;
use crate::output::{bullet_list, heading, print_json};

pub fn run(services: &AppServices, name: &str, json: bool) -> Result<(), CliError> {
    let certificate = services.certificates().issue(name)?;
    let vm = CertificateVm::from(&certificate);
    if json {
        return print_json(&vm);
    }

    heading("Certificate of Completion");
    println!("This is to certify that");
    println!();
    println!("    {}", vm.recipient);
    println!();
    println!("has successfully completed the {}", vm.program);
    println!("and demonstrated proficiency in:");
    bullet_list(&vm.skills);
    println!();
    println!("Issued on {}", vm.issued_on);
    println!("Credential ID: {}", vm.credential_id);
    Ok(())
}
