use dotenvy::dotenv;
use solid_samples::{
    config::{NotificationConfig, RegistrationConfig, settings},
    core::{
        device::{
            Light, SecurityCamera, SmartDevice, SmartSecurityCamera, SmartSpeaker,
            SmartThermostat, Speaker, Thermostat, switch_all_off,
        },
        media::{AudioFile, GifFile, MediaFile, Resolution, VideoFile, total_duration},
        notification::{
            EmailService, NotificationManager, PushNotificationService, SmsService, User,
        },
        registration::{
            self, CsvUserExporter, InMemoryUserStore, LoggingWelcomeNotifier, RegistrationService,
            RequiredFieldsValidator, UserExporter, UserManager,
        },
        shipping::{
            ExpressShippingCalculator, InternationalShippingCalculator,
            OvernightShippingCalculator, Package, RegularShippingCalculator, ShippingCalculator,
            quote,
        },
    },
    errors::Result,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load settings
    let config = settings::load_default_config()
        .inspect_err(|e| error!("Critical error loading configuration: {}", e))?;

    // 4. Run each sample
    run_notification_sample(&config.notification)?;
    run_device_sample();
    run_media_sample();
    run_shipping_sample()?;
    run_registration_sample(&config.registration)?;

    info!("All samples finished.");
    Ok(())
}

fn run_notification_sample(config: &NotificationConfig) -> Result<()> {
    info!("--- Dependency inversion: notification dispatch ---");
    let manager = NotificationManager::new(
        Box::new(EmailService),
        Box::new(SmsService),
        Box::new(PushNotificationService),
    )
    .with_subject(config.subject.clone());

    let user = User {
        id: 1,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        phone: "+15550100".to_string(),
        device_id: "device-alice-1".to_string(),
    };
    manager.notify_user(&user, "Your order has shipped")
}

fn run_device_sample() {
    info!("--- Interface segregation: smart devices ---");
    let mut light = Light::new();
    let mut thermostat = Thermostat::new();
    let mut camera = SecurityCamera::new();
    let mut speaker = Speaker::new();

    light.turn_on();
    thermostat.turn_on();
    thermostat.set_temperature(21.5);
    camera.turn_on();
    speaker.turn_on();
    info!(bytes = camera.stream_video().len(), "Camera streaming");
    info!(bytes = speaker.play_music().len(), "Speaker playing");
    info!(setpoint = thermostat.temperature(), "Thermostat set");

    let mut devices: [&mut dyn SmartDevice; 4] =
        [&mut light, &mut thermostat, &mut camera, &mut speaker];
    switch_all_off(&mut devices);
    info!(
        any_on = devices.iter().any(|d| d.is_on()),
        "Switched every device off"
    );
}

fn run_media_sample() {
    info!("--- Liskov substitution: media playback ---");
    let video = VideoFile::new("trailer.mp4", 150, Resolution::new(1920, 1080));
    let audio = AudioFile::new("theme.mp3", 210);
    let still = GifFile::new("logo.gif", Resolution::new(128, 128), false, 12);
    let animated = GifFile::new("spinner.gif", Resolution::new(64, 64), true, 3);

    let playlist: [&dyn MediaFile; 4] = [&video, &audio, &still, &animated];
    for file in playlist {
        file.play();
    }
    info!(seconds = total_duration(&playlist), "Playlist duration");
}

fn run_shipping_sample() -> Result<()> {
    info!("--- Open/closed: shipping cost strategies ---");
    let package = Package::new(10.0, 100.0)?;
    let rates: [(&str, &dyn ShippingCalculator); 4] = [
        ("regular", &RegularShippingCalculator),
        ("express", &ExpressShippingCalculator),
        ("international", &InternationalShippingCalculator),
        ("overnight", &OvernightShippingCalculator),
    ];
    for (name, calculator) in rates {
        info!(rate = name, cost = quote(calculator, &package), "Shipping quote");
    }
    Ok(())
}

fn run_registration_sample(config: &RegistrationConfig) -> Result<()> {
    info!("--- Single responsibility: user registration ---");
    let users = [
        sample_registration_user(1, "Alice", "alice@example.com"),
        sample_registration_user(2, "", "nobody@example.com"),
        sample_registration_user(3, "Bob", "bob@example.com"),
    ];

    let mut manager = UserManager::new().with_welcome_subject(config.welcome_subject.clone());
    for user in users.clone() {
        if let Err(e) = manager.add_user(user) {
            warn!("UserManager rejected user: {e}");
        }
    }
    info!(
        stored = manager.users().len(),
        welcomed = manager.welcome_emails_sent(),
        "UserManager finished"
    );

    let exporter: Box<dyn UserExporter> = match &config.export_path {
        Some(path) => Box::new(CsvUserExporter::new(std::fs::File::create(path)?)),
        None => Box::new(CsvUserExporter::new(std::io::stdout())),
    };
    let mut service = RegistrationService::new(
        Box::new(RequiredFieldsValidator),
        Box::new(InMemoryUserStore::default()),
        Box::new(LoggingWelcomeNotifier::new(config.welcome_subject.clone())),
        exporter,
    );
    for user in users {
        if let Err(e) = service.register(user) {
            warn!("RegistrationService rejected user: {e}");
        }
    }
    info!(stored = service.users().len(), "RegistrationService finished");
    Ok(())
}

fn sample_registration_user(id: u64, name: &str, email: &str) -> registration::User {
    registration::User {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: format!("secret-{id}"),
    }
}
