use rustybeacon::hci::open_device;
use rustybeacon::BeaconController;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com".to_string());

    // Bring up and open the first available controller
    let mut socket = match open_device(None) {
        Ok(socket) => socket,
        Err(e) => {
            eprintln!("Failed to open HCI device: {}", e);
            eprintln!("This might be because:");
            eprintln!("1. No Bluetooth adapter is available");
            eprintln!("2. The Bluetooth adapter is not powered on");
            eprintln!("3. You don't have sufficient permissions to access the Bluetooth device");
            return Err(e.into());
        }
    };

    let mut beacon = BeaconController::new(&mut socket)?;

    beacon.set_eddystone_url(&url)?;
    println!("Advertising {}", url);

    // Wait for user input to stop advertising
    println!("Press Enter to stop advertising...");
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    beacon.disable_advertising()?;
    println!("Stopped advertising");

    Ok(())
}
