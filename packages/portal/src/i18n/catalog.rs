//! The translation catalog.
//!
//! Every key is declared once together with its text in each language, so a
//! key cannot exist in one table and be missing from the other. `TrKey` is the
//! closed key set generated from these declarations.

use super::Language;

macro_rules! catalog {
    ($( $variant:ident = $key:literal { en: $en:literal, hi: $hi:literal } )*) => {
        /// A translation key. `as_str` gives the dot-namespaced key string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TrKey {
            $( $variant, )*
        }

        impl TrKey {
            pub const ALL: &'static [TrKey] = &[ $( TrKey::$variant, )* ];

            pub fn as_str(self) -> &'static str {
                match self {
                    $( TrKey::$variant => $key, )*
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $( $key => Some(TrKey::$variant), )*
                    _ => None,
                }
            }

            pub fn text(self, lang: Language) -> &'static str {
                match (self, lang) {
                    $(
                        (TrKey::$variant, Language::En) => $en,
                        (TrKey::$variant, Language::Hi) => $hi,
                    )*
                }
            }
        }
    };
}

catalog! {
    // home
    HomeTitle = "home.title" { en: "Jal Rakshak", hi: "जल रक्षक" }
    HomeSubtitle = "home.subtitle" { en: "Water Supply Management System", hi: "जल आपूर्ति प्रबंधन प्रणाली" }
    HomeDescription = "home.description" { en: "Safe Water, Every Village", hi: "सुरक्षित पानी, हर गांव तक" }
    HomeAbout = "home.about" { en: "About the System", hi: "सिस्टम के बारे में" }
    HomeAboutDesc = "home.aboutDesc" { en: "Jal Rakshak is a comprehensive digital platform for monitoring and managing rural piped water supply systems across 6 divisions. Our system ensures safe water delivery, efficient pump operations, and community engagement.", hi: "जल रक्षक 6 डिवीजनों में ग्रामीण पाइप जल आपूर्ति प्रणालियों की निगरानी और प्रबंधन के लिए एक व्यापक डिजिटल प्लेटफॉर्म है। हमारा सिस्टम सुरक्षित पानी वितरण, कुशल पंप संचालन और सामुदायिक भागीदारी सुनिश्चित करता है।" }
    HomeFeatures = "home.features" { en: "Key Features", hi: "मुख्य विशेषताएं" }
    HomeFeature1 = "home.feature1" { en: "Real-time Water Quality Monitoring", hi: "रियल-टाइम पानी गुणवत्ता निगरानी" }
    HomeFeature2 = "home.feature2" { en: "Smart Pump Management System", hi: "स्मार्ट पंप प्रबंधन सिस्टम" }
    HomeFeature3 = "home.feature3" { en: "Community Complaint System", hi: "सामुदायिक शिकायत प्रणाली" }
    HomeFeature4 = "home.feature4" { en: "Predictive Maintenance Alerts", hi: "प्रेडिक्टिव मेंटेनेंस अलर्ट" }
    HomeGetStarted = "home.getStarted" { en: "Get Started", hi: "शुरू करें" }
    HomeLoginNow = "home.loginNow" { en: "Login Now", hi: "अभी लॉगिन करें" }
    HomeStartToday = "home.startToday" { en: "Start Today", hi: "आज ही शुरू करें" }
    HomeStartTodayDesc = "home.startTodayDesc" { en: "Join us in improving your village water supply system", hi: "अपने गांव के पानी की आपूर्ति को बेहतर बनाने में शामिल हों" }

    // login
    LoginTitle = "login.title" { en: "Jal Rakshak", hi: "जल रक्षक" }
    LoginSubtitle = "login.subtitle" { en: "Village Panchayat Water Supply Management", hi: "ग्राम पंचायत जल आपूर्ति प्रबंधन" }
    LoginSelectCategory = "login.selectCategory" { en: "Select Category", hi: "श्रेणी चुनें" }
    LoginUsers = "login.users" { en: "Users", hi: "उपयोगकर्ता" }
    LoginOfficials = "login.officials" { en: "Officials", hi: "अधिकारी" }
    LoginUsersDesc = "login.usersDesc" { en: "Village residents and community members", hi: "गांव निवासी और समुदायिक सदस्य" }
    LoginOfficialsDesc = "login.officialsDesc" { en: "Government officials and technicians", hi: "सरकारी अधिकारी और तकनीशियन" }
    LoginEnableLocation = "login.enableLocation" { en: "Enable Location", hi: "स्थान सक्षम करें" }
    LoginLocationDesc = "login.locationDesc" { en: "Confirm GPS for your location", hi: "अपने स्थान के लिए GPS की पुष्टि करें" }
    LoginRegisteredEmail = "login.registeredEmail" { en: "Enter your registered Email ID", hi: "अपना पंजीकृत ईमेल आईडी दर्ज करें" }
    LoginEmailDesc = "login.emailDesc" { en: "This data is set by central government", hi: "यह डेटा केंद्र सरकार द्वारा सेट किया गया है" }
    LoginPumpOperator = "login.pumpOperator" { en: "Pump Operator", hi: "पंप ऑपरेटर" }
    LoginVwsc = "login.vwsc" { en: "VWSC", hi: "VWSC" }
    LoginSarpanchOffice = "login.sarpanchOffice" { en: "Sarpanch Office", hi: "सरपंच कार्यालय" }
    LoginUsername = "login.username" { en: "Username", hi: "उपयोगकर्ता नाम" }
    LoginPassword = "login.password" { en: "Password", hi: "पासवर्ड" }
    LoginEmail = "login.email" { en: "Email ID", hi: "ईमेल आईडी" }
    LoginLoginButton = "login.loginButton" { en: "Login", hi: "लॉगिन करें" }
    LoginBack = "login.back" { en: "Back", hi: "वापस" }
    LoginBackToHome = "login.backToHome" { en: "Back to Home", hi: "वापस होम पेज पर" }

    // layout
    LayoutNotifications = "layout.notifications" { en: "Notifications", hi: "सूचनाएं" }
    LayoutSettings = "layout.settings" { en: "Settings", hi: "सेटिंग्स" }
    LayoutLogout = "layout.logout" { en: "Logout", hi: "लॉगआउट" }
    LayoutFooterTitle = "layout.footerTitle" { en: "Village Panchayat Water Supply Management System", hi: "ग्राम पंचायत जल आपूर्ति प्रबंधन प्रणाली" }
    LayoutFooterCopyright = "layout.footerCopyright" { en: "© 2025 Jal Rakshak", hi: "© 2025 जल रक्षक" }
    LayoutFooterSlogan = "layout.footerSlogan" { en: "Safe Water, Every Village", hi: "सुरक्षित पानी, हर गांव तक" }

    // user
    UserDashboard = "user.dashboard" { en: "Citizen Dashboard", hi: "नागरिक डैशबोर्ड" }
    UserLiveStatus = "user.liveStatus" { en: "Live Status", hi: "लाइव स्थिति" }
    UserSuggestions = "user.suggestions" { en: "View Suggestions", hi: "सुझाव देखें" }
    UserDivisionWaterQuality = "user.divisionWaterQuality" { en: "Division Water Quality", hi: "क्षेत्रीय पानी की गुणवत्ता" }
    UserDivisionDesc = "user.divisionDesc" { en: "Your area's live water quality index", hi: "आपके क्षेत्र की live water quality index" }
    UserMyComplaints = "user.myComplaints" { en: "My Complaints", hi: "मेरी शिकायतें" }
    UserRegisterComplaint = "user.registerComplaint" { en: "Register New Complaint", hi: "नई शिकायत दर्ज करें" }
    UserCommunityHealth = "user.communityHealth" { en: "Community Health", hi: "समुदायिक स्वास्थ्य" }
    UserDiseaseArea = "user.diseaseArea" { en: "Diseases spreading in the area", hi: "क्षेत्र में फैल रही बीमारियां" }
    UserPurificationTips = "user.purificationTips" { en: "Water Purification Tips", hi: "पानी शुद्धिकरण टिप्स" }
    UserCommunityChat = "user.communityChat" { en: "Community Chat", hi: "समुदायिक चैट" }
    UserSupplyStatus = "user.supplyStatus" { en: "Supply Status", hi: "आपूर्ति स्थिति" }
    UserActive = "user.active" { en: "Active", hi: "सक्रिय" }
    UserMaintenance = "user.maintenance" { en: "Maintenance", hi: "रखरखाव" }
    UserWqiScore = "user.wqiScore" { en: "WQI Score", hi: "WQI स्कोर" }
    UserResolved = "user.resolved" { en: "Resolved", hi: "हल हुआ" }
    UserPending = "user.pending" { en: "Pending", hi: "लंबित" }
    UserInProgress = "user.inProgress" { en: "In Progress", hi: "प्रगति में" }
    UserCases = "user.cases" { en: "cases", hi: "मामले" }

    // technician
    TechnicianDashboard = "technician.dashboard" { en: "Technician Dashboard", hi: "तकनीशियन डैशबोर्ड" }
    TechnicianSystemControl = "technician.systemControl" { en: "System Control", hi: "सिस्टम नियंत्रण" }
    TechnicianPumpControl = "technician.pumpControl" { en: "Pump Control System", hi: "पंप नियंत्रण सिस्टम" }
    TechnicianPumpControlDesc = "technician.pumpControlDesc" { en: "Manual and Auto mode control", hi: "मैन्युअल और ऑटो मोड कंट्रोल" }
    TechnicianMode = "technician.mode" { en: "Mode", hi: "मोड" }
    TechnicianAuto = "technician.auto" { en: "Auto", hi: "ऑटो" }
    TechnicianManual = "technician.manual" { en: "Manual", hi: "मैन्युअल" }
    TechnicianStatus = "technician.status" { en: "Status", hi: "स्थिति" }
    TechnicianRuntime = "technician.runtime" { en: "Runtime Today", hi: "आज का रनटाइम" }
    TechnicianRunning = "technician.running" { en: "running", hi: "चल रहा है" }
    TechnicianStopped = "technician.stopped" { en: "stopped", hi: "बंद" }
    TechnicianStopPump = "technician.stopPump" { en: "Stop Pump", hi: "पंप बंद करें" }
    TechnicianStartPump = "technician.startPump" { en: "Start Pump", hi: "पंप शुरू करें" }
    TechnicianAutoSchedule = "technician.autoSchedule" { en: "Auto Schedule: 6:00-9:00, 18:00-21:00", hi: "ऑटो शेड्यूल: 6:00-9:00, 18:00-21:00" }
    TechnicianSetSchedule = "technician.setSchedule" { en: "Set Schedule", hi: "शेड्यूल सेट करें" }
    TechnicianViewReports = "technician.viewReports" { en: "View Reports", hi: "रिपोर्ट देखें" }
    TechnicianEmergencyStop = "technician.emergencyStop" { en: "Emergency Stop", hi: "आपातकालीन बंद" }
    TechnicianPriority = "technician.priority" { en: "priority", hi: "प्राथमिकता" }
    TechnicianLiveSensorData = "technician.liveSensorData" { en: "Live Sensor Data", hi: "लाइव सेंसर डेटा" }
    TechnicianNormalRange = "technician.normalRange" { en: "Normal", hi: "सामान्य" }
    TechnicianGood = "technician.good" { en: "Good", hi: "अच्छा" }
    TechnicianTarget = "technician.target" { en: "Target", hi: "लक्ष्य" }

    // vwsc
    VwscDashboard = "vwsc.dashboard" { en: "VWSC Dashboard", hi: "VWSC डैशबोर्ड" }
    VwscCommittee = "vwsc.committee" { en: "Village Water & Sanitation Committee", hi: "ग्राम जल एवं स्वच्छता समिति" }
    VwscPopulation = "vwsc.population" { en: "Population", hi: "जनसंख्या" }
    VwscHouseholds = "vwsc.households" { en: "households", hi: "परिवार" }
    VwscGoodQuality = "vwsc.goodQuality" { en: "Good Quality", hi: "अच्छी गुणवत्ता" }
    VwscTodaySupply = "vwsc.todaySupply" { en: "Today's Supply", hi: "आज की आपूर्ति" }
    VwscMonthlyCollection = "vwsc.monthlyCollection" { en: "Monthly Collection", hi: "मासिक संग्रह" }
    VwscPendingComplaints = "vwsc.pendingComplaints" { en: "Pending Complaints", hi: "लंबित शिकायतें" }
    VwscTotalComplaints = "vwsc.totalComplaints" { en: "Total", hi: "कुल" }
    VwscComplaints = "vwsc.complaints" { en: "complaints", hi: "शिकायतें" }
    VwscWaterSchedule = "vwsc.waterSchedule" { en: "Water Supply Schedule", hi: "पानी आपूर्ति समय सारणी" }
    VwscScheduleDesc = "vwsc.scheduleDesc" { en: "Water supply timing for the village", hi: "गाँव के लिए पानी आपूर्ति का समय" }
    VwscMorning = "vwsc.morning" { en: "Morning", hi: "सुबह" }
    VwscEvening = "vwsc.evening" { en: "Evening", hi: "शाम" }
    VwscComplaintsTitle = "vwsc.complaintsTitle" { en: "Complaints", hi: "शिकायतें" }
    VwscViewAll = "vwsc.viewAll" { en: "View All Complaints", hi: "सभी शिकायतें देखें" }
    VwscFinancialSummary = "vwsc.financialSummary" { en: "Financial Summary", hi: "वित्तीय सारांश" }
    VwscMonthlyExpense = "vwsc.monthlyExpense" { en: "Monthly Expense", hi: "मासिक खर्च" }
    VwscTotalBalance = "vwsc.totalBalance" { en: "Total Balance", hi: "कुल शेष राशि" }
    VwscPendingPayments = "vwsc.pendingPayments" { en: "pending payments", hi: "परिवारों का भुगतान लंबित है" }
    VwscViewReport = "vwsc.viewReport" { en: "View Financial Report", hi: "वित्तीय रिपोर्ट देखें" }
    VwscCommitteeMembers = "vwsc.committeeMembers" { en: "Committee Members", hi: "समिति सदस्य" }
    VwscPresident = "vwsc.president" { en: "President", hi: "अध्यक्ष" }
    VwscSecretary = "vwsc.secretary" { en: "Secretary", hi: "सचिव" }
    VwscTreasurer = "vwsc.treasurer" { en: "Treasurer", hi: "कोषाध्यक्ष" }
    VwscMember = "vwsc.member" { en: "Member", hi: "सदस्य" }
    VwscUpcomingMeetings = "vwsc.upcomingMeetings" { en: "Upcoming Meetings", hi: "आगामी बैठकें" }
    VwscMembersInvited = "vwsc.membersInvited" { en: "members invited", hi: "सदस्य आमंत्रित" }
    VwscScheduleMeeting = "vwsc.scheduleMeeting" { en: "Schedule New Meeting", hi: "नई बैठक शेड्यूल करें" }
    VwscFromLastMonth = "vwsc.fromLastMonth" { en: "from last month", hi: "पिछले महीने से" }

    // admin
    AdminDashboard = "admin.dashboard" { en: "Admin Dashboard", hi: "प्रशासक डैशबोर्ड" }
    AdminSubtitle = "admin.subtitle" { en: "Admin Dashboard - Gram Panchayat / VWSC", hi: "प्रशासक डैशबोर्ड - ग्राम पंचायत / VWSC" }
    AdminSystemOverview = "admin.systemOverview" { en: "System Overview", hi: "सिस्टम अवलोकन" }
    AdminTotalPopulation = "admin.totalPopulation" { en: "Total Population", hi: "कुल जनसंख्या" }
    AdminAcrossDivisions = "admin.acrossDivisions" { en: "Across 6 divisions", hi: "6 डिवीजनों में" }
    AdminAverageWQI = "admin.averageWQI" { en: "Average WQI", hi: "औसत WQI" }
    AdminSystemWide = "admin.systemWide" { en: "System-wide average", hi: "सिस्टम-वाइड औसत" }
    AdminActivePumps = "admin.activePumps" { en: "Active Pumps", hi: "सक्रिय पंप" }
    AdminPumpsOperational = "admin.pumpsOperational" { en: "Pumps operational", hi: "पंप चालू" }
    AdminOpenComplaints = "admin.openComplaints" { en: "Open Complaints", hi: "खुली शिकायतें" }
    AdminPendingResolution = "admin.pendingResolution" { en: "Pending resolution", hi: "समाधान लंबित" }
    AdminOverview = "admin.overview" { en: "Overview", hi: "अवलोकन" }
    AdminDivisions = "admin.divisions" { en: "Divisions", hi: "डिवीजन" }
    AdminComplaints = "admin.complaints" { en: "Complaints", hi: "शिकायतें" }
    AdminReports = "admin.reports" { en: "Reports", hi: "रिपोर्ट" }
    AdminCriticalAlerts = "admin.criticalAlerts" { en: "Critical Alerts", hi: "महत्वपूर्ण चेतावनी" }
    AdminSystemPerformance = "admin.systemPerformance" { en: "System Performance", hi: "सिस्टम प्रदर्शन" }
    AdminOverallEfficiency = "admin.overallEfficiency" { en: "Overall Efficiency", hi: "समग्र दक्षता" }
    AdminWaterQualityCompliance = "admin.waterQualityCompliance" { en: "Water Quality Compliance", hi: "पानी की गुणवत्ता अनुपालन" }
    AdminPumpUptime = "admin.pumpUptime" { en: "Pump Uptime", hi: "पंप अपटाइम" }
    AdminQuickStats = "admin.quickStats" { en: "Quick Stats", hi: "त्वरित आंकड़े" }
    AdminAveragePressure = "admin.averagePressure" { en: "Average Pressure", hi: "औसत दबाव" }
    AdminTotalLeakages = "admin.totalLeakages" { en: "Total Leakages", hi: "कुल रिसाव" }
    AdminEnergyEfficiency = "admin.energyEfficiency" { en: "Energy Efficiency", hi: "ऊर्जा दक्षता" }
    AdminComplaintResolution = "admin.complaintResolution" { en: "Complaint Resolution Rate", hi: "शिकायत समाधान दर" }
    AdminRecentComplaints = "admin.recentComplaints" { en: "Recent Complaints", hi: "हाल की शिकायतें" }
    AdminComplaintManagement = "admin.complaintManagement" { en: "Complaint management and tracking", hi: "शिकायत प्रबंधन और ट्रैकिंग" }
    AdminViewDetails = "admin.viewDetails" { en: "View Details", hi: "विवरण देखें" }
    AdminLeakageDetected = "admin.leakageDetected" { en: "leakage(s) detected", hi: "रिसाव का पता चला" }
    AdminSendReport = "admin.sendReport" { en: "Send Report to Technician", hi: "तकनीशियन को रिपोर्ट भेजें" }
    AdminSelectTechnician = "admin.selectTechnician" { en: "Select Technician", hi: "तकनीशियन चुनें" }
    AdminReportMessage = "admin.reportMessage" { en: "Report Message", hi: "रिपोर्ट संदेश" }
    AdminPriority = "admin.priority" { en: "Priority", hi: "प्राथमिकता" }
    AdminHigh = "admin.high" { en: "High", hi: "उच्च" }
    AdminMedium = "admin.medium" { en: "Medium", hi: "मध्यम" }
    AdminLow = "admin.low" { en: "Low", hi: "कम" }
    AdminSendButton = "admin.sendButton" { en: "Send Report", hi: "रिपोर्ट भेजें" }

    // chatbot
    ChatbotTitle = "chatbot.title" { en: "Water Information Assistant", hi: "जल सूचना सहायक" }
    ChatbotSubtitle = "chatbot.subtitle" { en: "Ask me anything about water supply", hi: "पानी की आपूर्ति के बारे में कुछ भी पूछें" }
    ChatbotSelectLanguage = "chatbot.selectLanguage" { en: "Select Language", hi: "भाषा चुनें" }
    ChatbotHindi = "chatbot.hindi" { en: "Hindi", hi: "हिंदी" }
    ChatbotEnglish = "chatbot.english" { en: "English", hi: "English" }
    ChatbotTypeMessage = "chatbot.typeMessage" { en: "Type your question...", hi: "अपना सवाल लिखें..." }
    ChatbotSend = "chatbot.send" { en: "Send", hi: "भेजें" }
    ChatbotCommonQuestions = "chatbot.commonQuestions" { en: "Common Questions", hi: "सामान्य प्रश्न" }

    // common
    CommonDarkMode = "common.darkMode" { en: "Dark Mode", hi: "डार्क मोड" }
    CommonLightMode = "common.lightMode" { en: "Light Mode", hi: "लाइट मोड" }
    CommonLanguage = "common.language" { en: "Language", hi: "भाषा" }
    CommonEnglish = "common.english" { en: "English", hi: "English" }
    CommonHindi = "common.hindi" { en: "हिंदी", hi: "हिंदी" }
    CommonPhLevel = "common.phLevel" { en: "pH Level", hi: "pH स्तर" }
    CommonTurbidity = "common.turbidity" { en: "Turbidity", hi: "टर्बिडिटी" }
    CommonDissolvedOxygen = "common.dissolvedOxygen" { en: "Dissolved O₂", hi: "घुलित O₂" }
    CommonNitrate = "common.nitrate" { en: "Nitrate", hi: "नाइट्रेट" }
    CommonPressure = "common.pressure" { en: "Pressure", hi: "दबाव" }
    CommonFlowRate = "common.flowRate" { en: "Flow Rate", hi: "प्रवाह दर" }
    CommonWqi = "common.wqi" { en: "WQI", hi: "WQI" }
    CommonPump = "common.pump" { en: "Pump", hi: "पंप" }
    CommonRuntime = "common.runtime" { en: "Runtime", hi: "रनटाइम" }
    // role
    RoleCitizen = "role.citizen" { en: "Citizen", hi: "नागरिक" }
    RoleTechnician = "role.technician" { en: "Technician", hi: "तकनीशियन" }
    RoleCommittee = "role.committee" { en: "VWSC Member", hi: "VWSC सदस्य" }
    RoleAdmin = "role.admin" { en: "Admin", hi: "प्रशासक" }
    RoleCitizenDesc = "role.citizenDesc" { en: "View water quality and register complaints", hi: "जल गुणवत्ता देखें और शिकायत दर्ज करें" }
    RoleTechnicianDesc = "role.technicianDesc" { en: "Pump operation and sensor monitoring", hi: "पंप संचालन और सेंसर मॉनिटरिंग" }
    RoleCommitteeDesc = "role.committeeDesc" { en: "Village supply schedule and finances", hi: "गाँव की जल आपूर्ति और वित्त प्रबंधन" }
    RoleAdminDesc = "role.adminDesc" { en: "Full system management and reports", hi: "पूर्ण सिस्टम प्रबंधन और रिपोर्ट" }

    // login form
    LoginLoginAs = "login.loginAs" { en: "Login as", hi: "इस रूप में लॉगिन करें:" }
    LoginMissingRole = "login.missingRole" { en: "Select a category first", hi: "पहले श्रेणी चुनें" }
    LoginMissingUsername = "login.missingUsername" { en: "Enter your username", hi: "उपयोगकर्ता नाम दर्ज करें" }
    LoginMissingPassword = "login.missingPassword" { en: "Enter your password", hi: "पासवर्ड दर्ज करें" }

    // feature blurbs
    HomeFeature1Desc = "home.feature1Desc" { en: "Live monitoring of pH, turbidity, nitrates", hi: "pH, टर्बिडिटी, नाइट्रेट्स की लाइव निगरानी" }
    HomeFeature2Desc = "home.feature2Desc" { en: "Auto/Manual pump control & scheduling", hi: "ऑटो/मैन्युअल पंप नियंत्रण और शेड्यूलिंग" }
    HomeFeature3Desc = "home.feature3Desc" { en: "Community complaint tracking & resolution", hi: "समुदायिक शिकायत ट्रैकिंग और समाधान" }
    HomeFeature4Desc = "home.feature4Desc" { en: "AI-powered maintenance predictions", hi: "एआई-पावर्ड मेंटेनेंस पूर्वानुमान" }

    // water quality bands
    QualityGood = "quality.good" { en: "Good", hi: "अच्छा" }
    QualityModerate = "quality.moderate" { en: "Moderate", hi: "मध्यम" }
    QualityUnsafe = "quality.unsafe" { en: "Unsafe", hi: "असुरक्षित" }

    // complaint issues
    IssueNoSupply = "issue.noSupply" { en: "No water supply", hi: "पानी की आपूर्ति नहीं" }
    IssueLowPressure = "issue.lowPressure" { en: "Low water pressure", hi: "कम पानी का दबाव" }
    IssueMuddyWater = "issue.muddyWater" { en: "Muddy water", hi: "पानी में मिट्टी" }
    IssuePumpFailure = "issue.pumpFailure" { en: "Pump not working", hi: "पंप काम नहीं कर रहा" }
    IssuePipeLeak = "issue.pipeLeak" { en: "Leakage in pipe", hi: "पाइप में लीकेज" }
    IssueIrregularSupply = "issue.irregularSupply" { en: "Irregular supply", hi: "अनियमित आपूर्ति" }

    // water assistant
    ChatbotAssistant = "chatbot.assistant" { en: "जल सहायक / Water Assistant", hi: "जल सहायक / Water Assistant" }
    ChatbotPickLanguage = "chatbot.pickLanguage" { en: "भाषा चुनें / Select Language", hi: "भाषा चुनें / Select Language" }
    ChatbotGreeting = "chatbot.greeting" { en: "Hello! I am here to help you. Please select a question:", hi: "नमस्ते! मैं आपकी मदद के लिए यहाँ हूँ। कृपया एक प्रश्न चुनें:" }
    ChatbotChangeLanguage = "chatbot.changeLanguage" { en: "Change Language", hi: "भाषा बदलें" }
    ChatbotOpen = "chatbot.open" { en: "Open water assistant", hi: "जल सहायक खोलें" }
    ChatbotClose = "chatbot.close" { en: "Close", hi: "बंद करें" }
    ChatbotSupplyTimeQ = "chatbot.supplyTimeQ" { en: "When will water come?", hi: "पानी कब आएगा?" }
    ChatbotSupplyTimeA = "chatbot.supplyTimeA" { en: "Water supply in your area is from 6:00 AM to 8:00 AM and 5:00 PM to 7:00 PM. Timings may vary in special circumstances.", hi: "आपके क्षेत्र में पानी की आपूर्ति सुबह 6:00 से 8:00 बजे और शाम 5:00 से 7:00 बजे होती है। विशेष परिस्थितियों में समय बदल सकता है।" }
    ChatbotNitrateQ = "chatbot.nitrateQ" { en: "What is the safe nitrate level?", hi: "कितना नाइट्रेट सही होता है?" }
    ChatbotNitrateA = "chatbot.nitrateA" { en: "Safe nitrate level in drinking water should be below 45 mg/L. Levels above 45 mg/L can be harmful to health.", hi: "पीने के पानी में नाइट्रेट का सुरक्षित स्तर 45 mg/L से कम होना चाहिए। 45 mg/L से ऊपर का स्तर स्वास्थ्य के लिए हानिकारक हो सकता है।" }
    ChatbotCleanQ = "chatbot.cleanQ" { en: "Is our water clean?", hi: "हमारा पानी साफ है या नहीं?" }
    ChatbotCleanA = "chatbot.cleanA" { en: "You can check your area's WQI (Water Quality Index). A score of 80+ is good, 60-80 is moderate, and below 60 is unsafe. Check the dashboard for current information.", hi: "आप अपने क्षेत्र की WQI (Water Quality Index) जांच सकते हैं। 80+ स्कोर अच्छा है, 60-80 ठीक है, और 60 से कम खतरनाक है। वर्तमान जानकारी के लिए डैशबोर्ड देखें।" }
    ChatbotPurifyQ = "chatbot.purifyQ" { en: "How to purify water?", hi: "पानी कैसे शुद्ध करें?" }
    ChatbotPurifyA = "chatbot.purifyA" { en: "Boil water for at least 10 minutes, or use WHO-approved filters. You can also use chlorine tablets.", hi: "पानी को उबालें कम से कम 10 मिनट, या WHO अनुमोदित फिल्टर का उपयोग करें। क्लोरीन टैबलेट का भी उपयोग कर सकते हैं।" }
    ChatbotComplaintQ = "chatbot.complaintQ" { en: "How to file a complaint?", hi: "शिकायत कैसे करें?" }
    ChatbotComplaintA = "chatbot.complaintA" { en: "You can register a complaint using the 'Register New Complaint' button on your dashboard. You'll get a response within 24 hours.", hi: "आप डैशबोर्ड पर 'नई शिकायत दर्ज करें' बटन से शिकायत दर्ज कर सकते हैं। 24 घंटे में जवाब मिलेगा।" }

    // technician report form
    AdminReportDesc = "admin.reportDesc" { en: "Send instructions to a technician", hi: "तकनीशियन को निर्देश भेजें" }
    AdminTechnicianPlaceholder = "admin.technicianPlaceholder" { en: "Select technician...", hi: "तकनीशियन चुनें..." }
    AdminMessagePlaceholder = "admin.messagePlaceholder" { en: "Enter your message or instructions...", hi: "अपना संदेश या निर्देश लिखें..." }
    AdminMissingTechnician = "admin.missingTechnician" { en: "Enter a technician", hi: "तकनीशियन दर्ज करें" }
    AdminMissingMessage = "admin.missingMessage" { en: "Enter a message", hi: "संदेश दर्ज करें" }
    AdminReportSent = "admin.reportSent" { en: "Report sent", hi: "रिपोर्ट भेजी गई" }
}

impl std::fmt::Display for TrKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<&str> = TrKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), TrKey::ALL.len());
    }

    #[test]
    fn from_key_inverts_as_str() {
        for key in TrKey::ALL {
            assert_eq!(TrKey::from_key(key.as_str()), Some(*key));
        }
        assert_eq!(TrKey::from_key("admin.nope"), None);
    }

    #[test]
    fn no_entry_is_blank() {
        for key in TrKey::ALL {
            for lang in Language::ALL {
                assert!(!key.text(lang).trim().is_empty(), "{key} is blank in {lang}");
            }
        }
    }

    #[test]
    fn spot_check_both_tables() {
        assert_eq!(TrKey::AdminDashboard.text(Language::En), "Admin Dashboard");
        assert_eq!(TrKey::AdminDashboard.text(Language::Hi), "प्रशासक डैशबोर्ड");
        assert_eq!(TrKey::CommonHindi.text(Language::En), "हिंदी");
    }
}
