//! Static translation table for the supported interface languages.
//!
//! Each row carries one key with its English and Hindi strings so the two
//! languages cannot drift apart. Placeholders use `{name}` syntax.

#[cfg(test)]
#[path = "translations_test.rs"]
mod translations_test;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::net::types::Language;

/// `(key, en, hi)`
type Row = (&'static str, &'static str, &'static str);

static TABLE: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| ROWS.iter().map(|&(key, en, hi)| (key, (en, hi))).collect());

/// Look up `key` for `lang`.
pub fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    TABLE.get(key).map(|&(en, hi)| match lang {
        Language::En => en,
        Language::Hi => hi,
    })
}

/// Number of translated keys.
pub fn key_count() -> usize {
    TABLE.len()
}

const ROWS: &[Row] = &[
    // settings
    ("settings.title", "Account Settings", "खाता सेटिंग्स"),
    ("settings.subtitle", "Manage your account security and preferences", "अपनी खाता सुरक्षा और प्राथमिकताएं प्रबंधित करें"),
    ("settings.changePassword", "Change Password", "पासवर्ड बदलें"),
    ("settings.changePasswordDesc", "Update your password to keep your account secure", "अपने खाते को सुरक्षित रखने के लिए अपना पासवर्ड अपडेट करें"),
    ("settings.currentPassword", "Current Password", "वर्तमान पासवर्ड"),
    ("settings.newPassword", "New Password", "नया पासवर्ड"),
    ("settings.confirmPassword", "Confirm New Password", "नया पासवर्ड पुष्टि करें"),
    ("settings.enterCurrentPassword", "Enter your current password", "अपना वर्तमान पासवर्ड दर्ज करें"),
    ("settings.enterNewPassword", "Enter your new password (min 6 characters)", "अपना नया पासवर्ड दर्ज करें (न्यूनतम 6 अक्षर)"),
    ("settings.confirmNewPassword", "Confirm your new password", "अपना नया पासवर्ड पुष्टि करें"),
    ("settings.updatePassword", "Update Password", "पासवर्ड अपडेट करें"),
    ("settings.updatingPassword", "Updating Password...", "पासवर्ड अपडेट हो रहा है..."),
    ("settings.twoFactor", "Two-Factor Authentication", "दो-कारक प्रमाणीकरण"),
    ("settings.twoFactorDesc", "Add an extra layer of security to your account", "अपने खाते में एक अतिरिक्त सुरक्षा परत जोड़ें"),
    ("settings.enable2FA", "Enable Two-Factor Authentication", "दो-कारक प्रमाणीकरण सक्षम करें"),
    ("settings.requireVerification", "Require a verification code in addition to your password when signing in", "साइन इन करते समय अपने पासवर्ड के अलावा एक सत्यापन कोड की आवश्यकता होगी"),
    ("settings.verificationMethod", "Verification Method", "सत्यापन विधि"),
    ("settings.emailOTP", "Email OTP", "ईमेल OTP"),
    ("settings.smsOTP", "SMS OTP", "SMS OTP"),
    ("settings.emailOTPDesc", "You'll receive a verification code via email", "आपको ईमेल के माध्यम से एक सत्यापन कोड प्राप्त होगा"),
    ("settings.smsOTPDesc", "You'll receive a verification code via SMS", "आपको SMS के माध्यम से एक सत्यापन कोड प्राप्त होगा"),
    ("settings.language", "Language", "भाषा"),
    ("settings.languageDesc", "Choose your preferred language for the interface", "इंटरफ़ेस के लिए अपनी पसंदीदा भाषा चुनें"),
    ("settings.selectLanguage", "Select Language", "भाषा चुनें"),
    ("settings.languageUpdated", "Language updated", "भाषा अपडेट की गई"),
    ("settings.languageUpdatedDesc", "The interface language will be updated immediately", "इंटरफ़ेस भाषा तुरंत अपडेट हो जाएगी"),
    ("settings.english", "English", "अंग्रेजी"),
    ("settings.hindi", "हिंदी (Hindi)", "हिंदी"),

    // profile
    ("profile.accountSettings", "Account Settings", "खाता सेटिंग्स"),
    ("profile.logout", "Logout", "लॉगआउट"),
    ("profile.fullName", "Full Name", "पूरा नाम"),
    ("profile.email", "Email ID", "ईमेल आईडी"),
    ("profile.phone", "Phone", "फोन"),
    ("profile.username", "Username / User ID", "उपयोगकर्ता नाम / उपयोगकर्ता आईडी"),
    ("profile.role", "Role", "भूमिका"),
    ("profile.department", "Department", "विभाग"),

    // common
    ("common.back", "Back", "वापस"),
    ("common.loading", "Loading...", "लोड हो रहा है..."),
    ("common.error", "Error", "त्रुटि"),
    ("common.success", "Success", "सफल"),
    ("common.cancel", "Cancel", "रद्द करें"),
    ("common.save", "Save", "सहेजें"),
    ("common.close", "Close", "बंद करें"),
    ("common.message", "Message", "संदेश"),

    // landing
    ("landing.getStarted", "Get Started", "शुरू करें"),
    ("landing.login", "Login", "लॉगिन"),
    ("landing.submitApplication", "Submit Application", "आवेदन जमा करें"),
    ("landing.trackStatus", "Track Status", "स्थिति ट्रैक करें"),
    ("landing.liveGovernance", "Live Governance System", "लाइव शासन प्रणाली"),
    ("landing.platform", "Platform", "प्लेटफॉर्म"),
    ("landing.popularServices", "Popular Services", "लोकप्रिय सेवाएं"),
    ("landing.mostAccessed", "Most accessed government services this month", "इस महीने सबसे अधिक एक्सेस की गई सरकारी सेवाएं"),
    ("landing.viewAll", "View All", "सभी देखें"),
    ("landing.publicDashboard", "Public Dashboard", "सार्वजनिक डैशबोर्ड"),
    ("landing.overallPerformance", "Overall Performance", "समग्र प्रदर्शन"),
    ("landing.basedOnRatings", "Based on {count} verified citizen ratings", "{count} सत्यापित नागरिक रेटिंग के आधार पर"),
    ("landing.departmentRatings", "Department Ratings", "विभाग रेटिंग"),
    ("landing.departmentsListed", "Departments Listed", "विभाग सूचीबद्ध"),
    ("landing.ratings", "Ratings", "रेटिंग"),
    ("landing.officials", "Officials", "अधिकारी"),
    ("landing.whyRatingsMatter", "Why Ratings Matter?", "रेटिंग क्यों मायने रखती है?"),
    ("landing.ratingsMatterDesc", "Department ratings directly impact funding allocation and official performance reviews. Your feedback drives real change.", "विभाग रेटिंग सीधे फंड आवंटन और अधिकारी प्रदर्शन समीक्षा को प्रभावित करती है। आपकी प्रतिक्रिया वास्तविक परिवर्तन लाती है।"),
    ("landing.realTimeTracking", "Real-time Tracking", "रीयल-टाइम ट्रैकिंग"),
    ("landing.realTimeTrackingDesc", "Monitor your application's progress at every step. Get instant notifications and detailed timeline updates.", "हर कदम पर अपने आवेदन की प्रगति की निगरानी करें। तत्काल सूचनाएं और विस्तृत समयरेखा अपडेट प्राप्त करें।"),
    ("landing.blockchainVerified", "Blockchain Verified", "ब्लॉकचेन सत्यापित"),
    ("landing.blockchainVerifiedDesc", "Every approval is secured on the blockchain, ensuring tamper-proof records and absolute transparency.", "हर स्वीकृति ब्लॉकचेन पर सुरक्षित है, जो छेड़छाड़-प्रूफ रिकॉर्ड और पूर्ण पारदर्शिता सुनिश्चित करती है।"),
    ("landing.aiMonitoring", "AI Monitoring", "AI निगरानी"),
    ("landing.aiMonitoringDesc", "Smart algorithms detect delays and automatically escalate issues to higher authorities.", "स्मार्ट एल्गोरिदम देरी का पता लगाते हैं और स्वचालित रूप से मुद्दों को उच्च अधिकारियों तक बढ़ाते हैं।"),
    ("landing.candidateSelection", "Candidate Selection", "उम्मीदवार चयन"),
    ("landing.candidateSelectionDesc", "Participate in transparent internal primaries. Empower citizens to select party candidates and end dynasty politics.", "पारदर्शी आंतरिक प्राथमिकताओं में भाग लें। नागरिकों को पार्टी उम्मीदवारों का चयन करने और राजवंश राजनीति को समाप्त करने के लिए सशक्त बनाएं।"),
    ("landing.exploreCandidates", "Explore Candidates", "उम्मीदवारों का अन्वेषण करें"),
    ("landing.applications", "Applications", "आवेदन"),
    ("landing.successRate", "Success Rate", "सफलता दर"),
    ("landing.userRating", "User Rating", "उपयोगकर्ता रेटिंग"),
    ("landing.avgTime", "Avg Time", "औसत समय"),
    ("landing.days", "Days", "दिन"),

    // dashboard
    ("dashboard.welcome", "Welcome", "स्वागत है"),
    ("dashboard.dashboard", "Dashboard", "डैशबोर्ड"),
    ("dashboard.applications", "Applications", "आवेदन"),
    ("dashboard.total", "Total", "कुल"),
    ("dashboard.pending", "Pending", "लंबित"),
    ("dashboard.approved", "Approved", "अनुमोदित"),
    ("dashboard.rejected", "Rejected", "अस्वीकृत"),
    ("dashboard.submitNew", "Submit New Application", "नया आवेदन जमा करें"),
    ("dashboard.trackApplication", "Track Application", "आवेदन ट्रैक करें"),
    ("dashboard.viewDetails", "View Details", "विवरण देखें"),
    ("dashboard.noApplications", "No applications found", "कोई आवेदन नहीं मिला"),
    ("dashboard.filter", "Filter", "फ़िल्टर"),
    ("dashboard.all", "All", "सभी"),
    ("dashboard.logout", "Logout", "लॉगआउट"),
    ("dashboard.assigned", "Assigned", "नियत"),
    ("dashboard.inProgress", "In Progress", "प्रगति में"),
    ("dashboard.solved", "Solved", "हल"),
    ("dashboard.warnings", "Warnings", "चेतावनियां"),
    ("dashboard.searchApplications", "Search applications...", "आवेदन खोजें..."),
    ("dashboard.welcomeBack", "Welcome back", "वापसी पर स्वागत है"),
    ("dashboard.dailyOverview", "Here's your daily overview", "यहां आपका दैनिक अवलोकन है"),
    ("dashboard.manageApplications", "Manage your applications and requests", "अपने आवेदन और अनुरोध प्रबंधित करें"),

    // login
    ("login.welcomeToAccountability", "Welcome to Accountability", "Accountability में आपका स्वागत है"),
    ("login.selectRole", "Select your role to continue", "जारी रखने के लिए अपनी भूमिका चुनें"),
    ("login.citizen", "Citizen", "नागरिक"),
    ("login.citizenDesc", "Submit applications, track status, and rate services", "आवेदन जमा करें, स्थिति ट्रैक करें और सेवाओं को रेट करें"),
    ("login.official", "Official", "अधिकारी"),
    ("login.officialDesc", "Process applications and manage department tasks", "आवेदन प्रसंस्करण करें और विभाग कार्य प्रबंधित करें"),
    ("login.admin", "Admin", "एडमिन"),
    ("login.adminDesc", "Monitor system performance and manage users", "सिस्टम प्रदर्शन की निगरानी करें और उपयोगकर्ताओं को प्रबंधित करें"),
    ("login.judiciary", "Judiciary", "न्यायपालिका"),
    ("login.judiciaryDesc", "Review escalated cases and oversee accountability", "बढ़ाए गए मामलों की समीक्षा करें और जवाबदेही की निगरानी करें"),
    ("login.dontHaveAccount", "Don't have an account?", "खाता नहीं है?"),
    ("login.registerNow", "Register Now", "अभी पंजीकरण करें"),
    ("login.welcomeBack", "Welcome Back", "वापसी पर स्वागत है"),
    ("login.signIn", "Sign in to your account", "अपने खाते में साइन इन करें"),
    ("login.back", "Back", "वापस"),
    ("login.mobile", "Mobile", "मोबाइल"),
    ("login.email", "Email", "ईमेल"),
    ("login.mobileNumber", "Mobile Number", "मोबाइल नंबर"),
    ("login.enter10Digit", "Enter 10-digit number", "10 अंकों का नंबर दर्ज करें"),
    ("login.password", "Password", "पासवर्ड"),
    ("login.enterPassword", "Enter password", "पासवर्ड दर्ज करें"),
    ("login.usernameOrEmail", "Username or Email", "उपयोगकर्ता नाम या ईमेल"),
    ("login.enterUsernameOrEmail", "Enter username or email", "उपयोगकर्ता नाम या ईमेल दर्ज करें"),
    ("login.forgotPassword", "Forgot Password?", "पासवर्ड भूल गए?"),
    ("login.sendOTP", "Send OTP", "OTP भेजें"),
    ("login.login", "Login", "लॉगिन"),
    ("login.processing", "Processing...", "प्रसंस्करण..."),

    // register
    ("register.joinAccountability", "Join Accountability", "Accountability में शामिल हों"),
    ("register.selectRoleToStart", "Select your role to get started", "शुरू करने के लिए अपनी भूमिका चुनें"),
    ("register.alreadyHaveAccount", "Already have an account?", "पहले से खाता है?"),
    ("register.login", "Login", "लॉगिन"),
    ("register.createAccount", "Create Account", "खाता बनाएं"),
    ("register.joinPlatform", "Join our smart governance platform", "हमारे स्मार्ट शासन प्लेटफॉर्म में शामिल हों"),
    ("register.back", "Back", "वापस"),
    ("register.fullName", "Full Name", "पूरा नाम"),
    ("register.enterFullName", "Enter your full name", "अपना पूरा नाम दर्ज करें"),
    ("register.email", "Email", "ईमेल"),
    ("register.enterEmail", "Enter your email", "अपना ईमेल दर्ज करें"),
    ("register.mobileNumber", "Mobile Number", "मोबाइल नंबर"),
    ("register.enter10Digit", "Enter 10-digit number", "10 अंकों का नंबर दर्ज करें"),
    ("register.department", "Department", "विभाग"),
    ("register.selectDepartment", "Select Department", "विभाग चुनें"),
    ("register.subDepartment", "Sub-Department", "उप-विभाग"),
    ("register.selectSubDepartment", "Select Sub-Department", "उप-विभाग चुनें"),
    ("register.secretKey", "Secret Key", "गुप्त कुंजी"),
    ("register.enterAdminSecretKey", "Enter Admin Secret Key", "एडमिन गुप्त कुंजी दर्ज करें"),
    ("register.enterOfficialSecretKey", "Enter Official Secret Key", "अधिकारी गुप्त कुंजी दर्ज करें"),
    ("register.documentType", "Document Type", "दस्तावेज़ प्रकार"),
    ("register.selectDocumentType", "Select document type", "दस्तावेज़ प्रकार चुनें"),
    ("register.aadhaarCard", "Aadhaar Card", "आधार कार्ड"),
    ("register.panCard", "PAN Card", "पैन कार्ड"),
    ("register.voterID", "Voter ID", "मतदाता आईडी"),
    ("register.drivingLicense", "Driving License", "ड्राइविंग लाइसेंस"),
    ("register.passport", "Passport", "पासपोर्ट"),
    ("register.aadhaarNumber", "Aadhaar Number", "आधार नंबर"),
    ("register.panNumber", "PAN Number", "पैन नंबर"),
    ("register.voterIDNumber", "Voter ID Number", "मतदाता आईडी नंबर"),
    ("register.drivingLicenseNumber", "Driving License Number", "ड्राइविंग लाइसेंस नंबर"),
    ("register.passportNumber", "Passport Number", "पासपोर्ट नंबर"),
    ("register.enterDocumentNumber", "Enter document number", "दस्तावेज़ नंबर दर्ज करें"),
    ("register.username", "Username", "उपयोगकर्ता नाम"),
    ("register.chooseUsername", "Choose a username", "एक उपयोगकर्ता नाम चुनें"),
    ("register.password", "Password", "पासवर्ड"),
    ("register.confirm", "Confirm", "पुष्टि करें"),
    ("register.register", "Register", "पंजीकरण करें"),
    ("register.registering", "Registering...", "पंजीकरण हो रहा है..."),

    // official
    ("official.dashboard", "Dashboard", "डैशबोर्ड"),
    ("official.welcomeBack", "Welcome back", "वापसी पर स्वागत है"),
    ("official.dailyOverview", "Here's your daily overview", "यहां आपका दैनिक अवलोकन है"),
    ("official.searchApplications", "Search applications...", "आवेदन खोजें..."),
    ("official.assigned", "Assigned to Me", "मुझे नियत"),
    ("official.pendingReview", "Pending Review", "लंबित समीक्षा"),
    ("official.completedToday", "Completed Today", "आज पूर्ण"),
    ("official.avgProcessingTime", "Avg. Processing Time", "औसत प्रसंस्करण समय"),
    ("official.allApplications", "All Applications", "सभी आवेदन"),
    ("official.recentActivity", "Recent Activity", "हाल की गतिविधि"),

    // admin
    ("admin.dashboard", "Dashboard", "डैशबोर्ड"),
    ("admin.departmentStats", "Department Statistics", "विभाग आंकड़े"),
    ("admin.totalApplications", "Total Applications", "कुल आवेदन"),
    ("admin.assignedCount", "Assigned", "नियत"),
    ("admin.approvedCount", "Approved", "अनुमोदित"),
    ("admin.rejectedCount", "Rejected", "अस्वीकृत"),
    ("admin.pendingCount", "Pending", "लंबित"),
    ("admin.solvedCount", "Solved", "हल"),
    ("admin.unsolvedCount", "Unsolved", "अनसुलझा"),
    ("admin.warningsSent", "Warnings Sent", "चेतावनियां भेजी गईं"),
    ("admin.officials", "Officials", "अधिकारी"),
    ("admin.viewDetails", "View Details", "विवरण देखें"),
    ("admin.sendWarning", "Send Warning", "चेतावनी भेजें"),
    ("admin.warningMessage", "Warning Message", "चेतावनी संदेश"),
    ("admin.enterWarningMessage", "Enter warning message for this official", "इस अधिकारी के लिए चेतावनी संदेश दर्ज करें"),
    ("admin.send", "Send", "भेजें"),
    ("admin.cancel", "Cancel", "रद्द करें"),
];
