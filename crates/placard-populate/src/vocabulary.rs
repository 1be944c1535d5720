/* crates/placard-populate/src/vocabulary.rs */

//! The bracketed-token vocabulary. This table is the contract between
//! content authors, who write the tokens into page markup, and the data
//! documents, which must supply the fields the paths point at.

/// Token and data-path pairs for the local information document.
const LOCAL_INFO_VOCABULARY: &[(&str, &str)] = &[
  // Executive leadership
  ("[Mayor Name]", "executiveLeadership.mayorName"),
  ("[City Manager Name]", "executiveLeadership.cityManagerName"),
  ("[Assistant City Manager Name]", "executiveLeadership.assistantCityManagerName"),
  ("[City Clerk Name]", "executiveLeadership.cityClerkName"),
  // Department heads
  ("[Police Chief Name]", "departmentHeads.policeChiefName"),
  ("[Fire Chief Name]", "departmentHeads.fireChiefName"),
  ("[Public Works Director]", "departmentHeads.publicWorksDirector"),
  ("[Parks Director]", "departmentHeads.parksRecreationDirector"),
  // Ward representatives
  ("[Ward 1 Council Member A Name]", "wardRepresentatives.ward1.councilMemberA.name"),
  ("[ward1a@overlandpark.org]", "wardRepresentatives.ward1.councilMemberA.email"),
  ("[Ward 1 Council Member B Name]", "wardRepresentatives.ward1.councilMemberB.name"),
  ("[ward1b@overlandpark.org]", "wardRepresentatives.ward1.councilMemberB.email"),
  ("[Ward 2 Council Member A Name]", "wardRepresentatives.ward2.councilMemberA.name"),
  ("[ward2a@overlandpark.org]", "wardRepresentatives.ward2.councilMemberA.email"),
  ("[Ward 2 Council Member B Name]", "wardRepresentatives.ward2.councilMemberB.name"),
  ("[ward2b@overlandpark.org]", "wardRepresentatives.ward2.councilMemberB.email"),
  ("[Ward 3 Council Member A Name]", "wardRepresentatives.ward3.councilMemberA.name"),
  ("[ward3a@overlandpark.org]", "wardRepresentatives.ward3.councilMemberA.email"),
  ("[Ward 3 Council Member B Name]", "wardRepresentatives.ward3.councilMemberB.name"),
  ("[ward3b@overlandpark.org]", "wardRepresentatives.ward3.councilMemberB.email"),
  ("[Ward 4 Council Member A Name]", "wardRepresentatives.ward4.councilMemberA.name"),
  ("[ward4a@overlandpark.org]", "wardRepresentatives.ward4.councilMemberA.email"),
  ("[Ward 4 Council Member B Name]", "wardRepresentatives.ward4.councilMemberB.name"),
  ("[ward4b@overlandpark.org]", "wardRepresentatives.ward4.councilMemberB.email"),
  ("[Ward 5 Council Member A Name]", "wardRepresentatives.ward5.councilMemberA.name"),
  ("[ward5a@overlandpark.org]", "wardRepresentatives.ward5.councilMemberA.email"),
  ("[Ward 5 Council Member B Name]", "wardRepresentatives.ward5.councilMemberB.name"),
  ("[ward5b@overlandpark.org]", "wardRepresentatives.ward5.councilMemberB.email"),
  ("[Ward 6 Council Member A Name]", "wardRepresentatives.ward6.councilMemberA.name"),
  ("[ward6a@overlandpark.org]", "wardRepresentatives.ward6.councilMemberA.email"),
  ("[Ward 6 Council Member B Name]", "wardRepresentatives.ward6.councilMemberB.name"),
  ("[ward6b@overlandpark.org]", "wardRepresentatives.ward6.councilMemberB.email"),
  // City contact
  ("[City Hall Address]", "cityContact.cityHallAddress"),
  ("[City Hall Hours]", "cityContact.cityHallHours"),
  ("[City Hall Phone Number]", "cityContact.cityHallMainPhone"),
  ("[City Phone Number]", "cityContact.cityHallMainPhone"),
  // Elections and voting
  ("[Election Office Address]", "electionsVoting.electionOfficeAddress"),
  ("[Election Office Phone Number]", "electionsVoting.electionOfficePhone"),
  ("[Next City Election Date]", "electionsVoting.nextCityElectionDate"),
  ("[Next General Election Date]", "electionsVoting.nextGeneralElectionDate"),
  // Public meetings
  ("[City Council Meeting Schedule]", "publicMeetings.cityCouncilRegularSchedule"),
  ("[City Council Study Session Schedule]", "publicMeetings.cityCouncilStudySessionSchedule"),
  ("[Meeting Location]", "publicMeetings.cityCouncilMeetingLocation"),
  ("[Planning Commission Meeting Schedule]", "publicMeetings.planningCommissionSchedule"),
  ("[Planning Commission Meeting Location]", "publicMeetings.planningCommissionLocation"),
  // Emergency services
  ("[Police Non-Emergency Phone Number]", "emergencyServices.policeNonEmergencyPhone"),
  ("[Fire Non-Emergency Phone Number]", "emergencyServices.fireNonEmergencyPhone"),
  ("[Animal Control Phone Number]", "emergencyServices.animalControlPhone"),
  // Parks and recreation
  ("[Parks Department Phone Number]", "parksRecreation.parksDepartmentPhone"),
  ("[Golf Course Names]", "parksRecreation.golfCourseNames"),
  ("[Arboretum Name]", "parksRecreation.arboretumName"),
  // Schools and education
  ("[Shawnee Mission School District Phone Number]", "schoolsEducation.shawneeMissionPhone"),
  ("[Blue Valley School District Phone Number]", "schoolsEducation.blueValleyPhone"),
  ("[Library Branch Name 1]", "schoolsEducation.libraryBranches.0"),
  ("[Library Branch Name 2]", "schoolsEducation.libraryBranches.1"),
  ("[Library Branch Name 3]", "schoolsEducation.libraryBranches.2"),
  ("[Library Branch Name 4]", "schoolsEducation.libraryBranches.3"),
  // Transportation
  ("[KCATA Phone Number]", "transportation.kcataPhone"),
  ("[Interstate Highway Numbers]", "transportation.interstateHighways"),
  ("[Major Street Names]", "transportation.majorStreets"),
  ("[US Highway Numbers]", "transportation.usHighways"),
  // City statistics
  ("[City Population]", "cityStatistics.population"),
  ("[City Area in square miles]", "cityStatistics.areaSqMiles"),
  ("[City Founded Year]", "cityStatistics.foundedYear"),
];

/// An ordered token-to-path table. Each token maps to exactly one path;
/// insertion order is the order tokens are tried during a pass.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderMap {
  entries: Vec<(String, String)>,
}

impl PlaceholderMap {
  pub fn new() -> Self {
    Self::default()
  }

  /// The site's full local-information vocabulary.
  pub fn local_info() -> Self {
    let entries = LOCAL_INFO_VOCABULARY
      .iter()
      .map(|(token, path)| (token.to_string(), path.to_string()))
      .collect();
    Self { entries }
  }

  /// Add a token, replacing the path of an existing one.
  pub fn insert(&mut self, token: impl Into<String>, path: impl Into<String>) {
    let token = token.into();
    let path = path.into();
    match self.entries.iter_mut().find(|(existing, _)| *existing == token) {
      Some(entry) => entry.1 = path,
      None => self.entries.push((token, path)),
    }
  }

  pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(token, path)| (token.as_str(), path.as_str()))
  }

  pub fn path_for(&self, token: &str) -> Option<&str> {
    self
      .entries
      .iter()
      .find(|(existing, _)| existing == token)
      .map(|(_, path)| path.as_str())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
