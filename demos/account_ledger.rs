//! Account ledger walkthrough example

use bankbook_core::{quick_amount, AccountForm, FileStore, Ledger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("🏦 Bankbook Core - Account Ledger Example\n");

    // A file-backed store: the list survives between runs of this example
    let store = FileStore::new(std::env::temp_dir().join("bankbook-demo").join("accounts.json"));
    let path = store.path().to_path_buf();
    let mut ledger = Ledger::load(store)?;
    println!("📂 Loaded {} account(s) from {}\n", ledger.accounts().len(), path.display());

    // 1. Register two accounts through the form
    println!("📝 Registering accounts...");
    let mut form = AccountForm::new();

    form.bank_name = "Acme".to_string();
    form.agency_number = "1".to_string();
    form.account_number = "100".to_string();
    form.balance = "200".to_string();
    let acme = form.submit(&mut ledger)?.expect("register yields the account");
    println!("  ✓ Registered #{}: {acme}", acme.id);

    form.bank_name = "Globex".to_string();
    form.agency_number = "2".to_string();
    form.account_number = "200".to_string();
    form.balance = "300".to_string();
    let globex = form.submit(&mut ledger)?.expect("register yields the account");
    println!("  ✓ Registered #{}: {globex}\n", globex.id);

    // 2. Quick row actions: deposit and withdraw the fixed amount
    println!("💰 Quick movements of {}...", quick_amount());
    let acme = ledger.deposit(acme.id, &quick_amount())?.expect("account exists");
    println!("  ✓ Deposited into Acme, balance now {}", acme.balance);

    let acme = ledger.withdraw(acme.id, &quick_amount())?.expect("account exists");
    println!("  ✓ Withdrew from Acme, balance now {}\n", acme.balance);

    // 3. An overdraft attempt is rejected and changes nothing
    println!("🚫 Trying to withdraw far more than the balance...");
    match ledger.withdraw(globex.id, &"9999".parse()?) {
        Err(err) => println!("  ✓ Rejected: {err}"),
        Ok(_) => unreachable!("the balance cannot cover this"),
    }
    println!();

    // 4. Edit Globex in place through an edit session
    println!("✏️  Editing Globex...");
    form.begin_edit(ledger.find(globex.id).expect("still registered"));
    form.bank_name = "Globex International".to_string();
    if let Some(updated) = form.submit(&mut ledger)? {
        println!("  ✓ Saved #{}: {updated}\n", updated.id);
    }

    // 5. Final state
    println!("📋 Accounts on file:");
    for account in ledger.accounts() {
        println!("  #{} {account}", account.id);
    }

    // 6. Clean up so the next run starts fresh
    for id in ledger.accounts().iter().map(|a| a.id).collect::<Vec<_>>() {
        ledger.delete(id)?;
    }
    println!("\n🧹 Deleted everything; {} account(s) remain", ledger.accounts().len());

    Ok(())
}
